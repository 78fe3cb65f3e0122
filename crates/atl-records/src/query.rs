//! Read-only response projections.

use serde::{Deserialize, Serialize};

use atl_types::{Asset, FlightRecord};

use crate::error::{RecordError, RecordResult};

/// Response shape of the asset-by-id query: `{TailNumber, Asset}`.
///
/// When no asset matches the requested id the projection carries the
/// zero-valued [`Asset`] rather than failing, so "found with all-default
/// fields" and "not found" are indistinguishable on the wire. Callers that
/// need the distinction should use
/// [`FlightRecord::asset`](atl_types::FlightRecord::asset) in process; the
/// wire shape is kept as-is for compatibility with existing consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLookup {
    #[serde(rename = "TailNumber")]
    pub tail_number: String,

    #[serde(rename = "Asset", default)]
    pub asset: Asset,
}

impl AssetLookup {
    /// Project the asset matching `asset_id` out of `record`.
    pub fn from_record(record: &FlightRecord, asset_id: &str) -> Self {
        Self {
            tail_number: record.tail_number.as_str().to_string(),
            asset: record.asset(asset_id).cloned().unwrap_or_default(),
        }
    }

    /// Encode the projection as a response payload.
    pub fn encode(&self) -> RecordResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| RecordError::Encode(e.to_string()))
    }
}
