use serde::{Deserialize, Serialize};

use crate::tail::TailNumber;

/// Object type tag carried by every stored [`FlightRecord`].
///
/// Distinguishes the record schema from other entry kinds sharing the same
/// ledger namespace (composite index entries, future schema versions).
pub const RECORD_OBJECT_TYPE: &str = "record";

/// A tracked component or part fitted to an aircraft.
///
/// Assets live embedded in their parent [`FlightRecord`] and are never
/// stored independently. `asset_id` is unique within the parent's asset
/// list and immutable once inserted; the remaining fields are mutable
/// through the update operation.
///
/// The zero-valued asset (`Asset::default()`) is a meaningful wire value:
/// the asset-lookup query returns it when no entry matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Identifier of the asset, unique within its record.
    #[serde(rename = "AssetID", default)]
    pub asset_id: String,

    /// Free-text manufacturer name.
    #[serde(rename = "Manufacturer", default, skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,

    /// Whether the asset is currently under warranty.
    #[serde(rename = "OnWarranty", default, skip_serializing_if = "is_false")]
    pub on_warranty: bool,

    /// Free-text status, e.g. "Active" or "Retired".
    #[serde(rename = "Status", default, skip_serializing_if = "String::is_empty")]
    pub status: String,
}

impl Asset {
    /// Construct an asset from its four fields.
    pub fn new(
        asset_id: impl Into<String>,
        manufacturer: impl Into<String>,
        on_warranty: bool,
        status: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            manufacturer: manufacturer.into(),
            on_warranty,
            status: status.into(),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// The stored entity: one record per aircraft, keyed by tail number.
///
/// A record is created once (empty asset list) and then mutated in place by
/// insert/update operations; it is never deleted. The record exclusively
/// owns its asset list, which preserves insertion order.
///
/// Stored records always carry all three fields, including an empty
/// `Assets` list. Decoding tolerates a missing `Assets` key because earlier
/// encoders omitted empty lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Schema tag; always [`RECORD_OBJECT_TYPE`].
    #[serde(rename = "objType")]
    pub object_type: String,

    /// Primary key. Immutable after creation.
    #[serde(rename = "tailNumber")]
    pub tail_number: TailNumber,

    /// Assets fitted to this aircraft, in insertion order.
    #[serde(rename = "Assets", default)]
    pub assets: Vec<Asset>,
}

impl FlightRecord {
    /// A fresh record for the given tail number, with no assets.
    pub fn new(tail_number: TailNumber) -> Self {
        Self {
            object_type: RECORD_OBJECT_TYPE.to_string(),
            tail_number,
            assets: Vec::new(),
        }
    }

    /// Look up an asset by id.
    pub fn asset(&self, asset_id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.asset_id == asset_id)
    }

    /// Mutable lookup of an asset by id.
    pub fn asset_mut(&mut self, asset_id: &str) -> Option<&mut Asset> {
        self.assets.iter_mut().find(|a| a.asset_id == asset_id)
    }

    /// Returns `true` if an asset with the given id exists in this record.
    pub fn contains_asset(&self, asset_id: &str) -> bool {
        self.asset(asset_id).is_some()
    }
}
