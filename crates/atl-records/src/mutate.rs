//! Pure mutators over a record's asset list.
//!
//! These operate on an already-decoded [`FlightRecord`] and carry the only
//! real invariants in the system: asset ids are unique within a record,
//! insertion order is preserved, and an update never touches the id or the
//! list shape. The repository wraps them in the get/put cycle.

use atl_types::{Asset, FlightRecord};

use crate::error::{RecordError, RecordResult};

/// What an update did to the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A matching asset was overwritten in place.
    Updated,
    /// No asset matched; the record was not touched.
    NoMatch,
}

impl UpdateOutcome {
    /// Returns `true` if the update changed the record.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Updated)
    }
}

/// Append `asset` to the record, enforcing asset-id uniqueness.
///
/// Fails without touching the record if the id is empty or already present.
pub fn insert_asset(record: &mut FlightRecord, asset: Asset) -> RecordResult<()> {
    if asset.asset_id.is_empty() {
        return Err(RecordError::Validation(
            "asset id must be a non-empty string".to_string(),
        ));
    }
    if record.contains_asset(&asset.asset_id) {
        return Err(RecordError::DuplicateAsset(asset.asset_id));
    }
    record.assets.push(asset);
    Ok(())
}

/// Overwrite the mutable fields of the asset matching `update.asset_id`.
///
/// The asset id itself is immutable and list order and length never change.
/// When no asset matches, the record is left untouched and `NoMatch` is
/// returned; the operation is still a success at the dispatch surface.
/// Existing consumers depend on this no-op contract (TODO: confirm with
/// the product owner whether it should become an upsert or an error);
/// do not change it here.
pub fn update_asset(record: &mut FlightRecord, update: &Asset) -> UpdateOutcome {
    match record.asset_mut(&update.asset_id) {
        Some(existing) => {
            existing.manufacturer = update.manufacturer.clone();
            existing.on_warranty = update.on_warranty;
            existing.status = update.status.clone();
            UpdateOutcome::Updated
        }
        None => UpdateOutcome::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use atl_types::TailNumber;

    use super::*;

    fn record_with(assets: &[Asset]) -> FlightRecord {
        let mut record = FlightRecord::new(TailNumber::new("AC123").unwrap());
        record.assets.extend_from_slice(assets);
        record
    }

    // -----------------------------------------------------------------------
    // Insert
    // -----------------------------------------------------------------------

    #[test]
    fn insert_appends_exactly_one() {
        let mut record = record_with(&[]);
        insert_asset(&mut record, Asset::new("A1", "Boeing", true, "Active")).unwrap();

        assert_eq!(record.assets.len(), 1);
        assert_eq!(record.assets[0], Asset::new("A1", "Boeing", true, "Active"));
    }

    #[test]
    fn insert_preserves_order() {
        let mut record = record_with(&[]);
        for id in ["A1", "A2", "A3"] {
            insert_asset(&mut record, Asset::new(id, "Boeing", false, "Active")).unwrap();
        }
        let ids: Vec<&str> = record.assets.iter().map(|a| a.asset_id.as_str()).collect();
        assert_eq!(ids, ["A1", "A2", "A3"]);
    }

    #[test]
    fn insert_duplicate_id_fails_and_leaves_record_alone() {
        let mut record = record_with(&[Asset::new("A1", "Boeing", true, "Active")]);
        let before = record.clone();

        let err =
            insert_asset(&mut record, Asset::new("A1", "Airbus", false, "Retired")).unwrap_err();
        assert!(matches!(err, RecordError::DuplicateAsset(ref id) if id == "A1"));
        assert_eq!(err.to_string(), "AssetID already exists: A1");
        assert_eq!(record, before);
    }

    #[test]
    fn insert_empty_id_fails() {
        let mut record = record_with(&[]);
        let err = insert_asset(&mut record, Asset::new("", "Boeing", true, "Active")).unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
        assert!(record.assets.is_empty());
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    #[test]
    fn update_overwrites_only_the_mutable_fields() {
        let mut record = record_with(&[
            Asset::new("A1", "Boeing", true, "Active"),
            Asset::new("A2", "GE", false, "Active"),
        ]);

        let outcome = update_asset(&mut record, &Asset::new("A1", "Airbus", false, "Retired"));
        assert_eq!(outcome, UpdateOutcome::Updated);
        assert!(outcome.changed());

        assert_eq!(record.assets.len(), 2);
        assert_eq!(record.assets[0], Asset::new("A1", "Airbus", false, "Retired"));
        // The sibling entry is untouched.
        assert_eq!(record.assets[1], Asset::new("A2", "GE", false, "Active"));
    }

    #[test]
    fn update_keeps_list_order() {
        let mut record = record_with(&[
            Asset::new("A1", "Boeing", true, "Active"),
            Asset::new("A2", "GE", false, "Active"),
            Asset::new("A3", "Rolls-Royce", true, "Active"),
        ]);

        update_asset(&mut record, &Asset::new("A2", "Safran", true, "Overhaul"));
        let ids: Vec<&str> = record.assets.iter().map(|a| a.asset_id.as_str()).collect();
        assert_eq!(ids, ["A1", "A2", "A3"]);
    }

    #[test]
    fn update_missing_id_is_a_no_op() {
        let mut record = record_with(&[Asset::new("A1", "Boeing", true, "Active")]);
        let before = record.clone();

        let outcome = update_asset(&mut record, &Asset::new("A9", "Airbus", false, "Retired"));
        assert_eq!(outcome, UpdateOutcome::NoMatch);
        assert!(!outcome.changed());
        assert_eq!(record, before);
    }
}
