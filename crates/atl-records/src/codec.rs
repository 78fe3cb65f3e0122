//! JSON codec for stored flight records.
//!
//! Records are stored as JSON with the wire field names defined in
//! `atl-types`. Field order is not significant; presence rules (empty
//! optional Asset fields omitted, `Assets` always written) are enforced by
//! the type's serde attributes, so encode here is a thin mapping onto
//! [`RecordError`].

use atl_types::FlightRecord;

use crate::error::{RecordError, RecordResult};

/// Encode a record to its stored byte representation.
pub fn encode_record(record: &FlightRecord) -> RecordResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| RecordError::Encode(e.to_string()))
}

/// Decode a record from stored bytes.
///
/// `tail` is the ledger key the bytes were read from; it is carried into
/// the error so a malformed entry can be located.
pub fn decode_record(tail: &str, bytes: &[u8]) -> RecordResult<FlightRecord> {
    serde_json::from_slice(bytes).map_err(|e| RecordError::Decode {
        tail: tail.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use atl_types::{Asset, TailNumber};
    use proptest::prelude::*;

    use super::*;

    fn tail(s: &str) -> TailNumber {
        TailNumber::new(s).unwrap()
    }

    #[test]
    fn encodes_with_ledger_field_names() {
        let mut record = FlightRecord::new(tail("AC123"));
        record.assets.push(Asset::new("A1", "Boeing", true, "Active"));

        let bytes = encode_record(&record).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["objType"], "record");
        assert_eq!(value["tailNumber"], "AC123");
        assert_eq!(value["Assets"][0]["AssetID"], "A1");
    }

    #[test]
    fn decode_rejects_malformed_bytes() {
        let err = decode_record("AC123", b"not json at all").unwrap_err();
        match err {
            RecordError::Decode { tail, .. } => assert_eq!(tail, "AC123"),
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(decode_record("AC123", b"[1,2,3]").is_err());
    }

    #[test]
    fn decode_rejects_empty_tail_number() {
        let bytes = br#"{"objType":"record","tailNumber":"","Assets":[]}"#;
        assert!(decode_record("AC123", bytes).is_err());
    }

    #[test]
    fn decode_tolerates_omitted_asset_list() {
        let bytes = br#"{"objType":"record","tailNumber":"AC123"}"#;
        let record = decode_record("AC123", bytes).unwrap();
        assert!(record.assets.is_empty());
    }

    proptest! {
        #[test]
        fn roundtrip(
            tail_number in "[A-Za-z0-9-]{1,12}",
            assets in prop::collection::vec(
                ("[A-Za-z0-9-]{1,8}", any::<String>(), any::<bool>(), any::<String>()),
                0..8,
            ),
        ) {
            let mut record = FlightRecord::new(TailNumber::new(tail_number).unwrap());
            for (id, manufacturer, on_warranty, status) in assets {
                record.assets.push(Asset::new(id, manufacturer, on_warranty, status));
            }

            let encoded = encode_record(&record).unwrap();
            let decoded = decode_record(record.tail_number.as_str(), &encoded).unwrap();
            prop_assert_eq!(decoded, record);
        }
    }
}
