//! The record repository: one get→decode→mutate→encode→put cycle per
//! operation, against a single ledger key.

use std::sync::Arc;

use tracing::debug;

use atl_store::StateStore;
use atl_types::{Asset, FlightRecord, TailNumber};

use crate::codec::{decode_record, encode_record};
use crate::error::{RecordError, RecordResult};
use crate::index::{composite_key, INDEX_SENTINEL};
use crate::mutate::{self, UpdateOutcome};
use crate::query::AssetLookup;

/// Orchestrates flight-record operations against a [`StateStore`].
///
/// The repository holds no state of its own beyond the injected store
/// handle; every operation reads the current record fresh, applies exactly
/// one mutation or projection, and (for mutations) writes the full record
/// back under its tail number. Failures never leave a partial write: the
/// single `put` happens only after validation and encoding succeed.
pub struct FlightRecordRepository {
    store: Arc<dyn StateStore>,
}

impl FlightRecordRepository {
    /// Create a repository over the given store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Returns `true` if a record is stored under `tail`.
    pub fn exists(&self, tail: &TailNumber) -> RecordResult<bool> {
        Ok(self.store.contains(tail.as_str())?)
    }

    /// Unconditionally write a fresh record with an empty asset list.
    ///
    /// Overwrites any existing record under the same tail number: this is
    /// a destructive bootstrap operation, not an idempotent create. Callers
    /// must guard against re-running it in production.
    pub fn init_record(&self, tail: &TailNumber) -> RecordResult<FlightRecord> {
        let record = FlightRecord::new(tail.clone());
        self.store_record(&record)?;
        debug!(tail = %tail, "initialized flight record");
        Ok(record)
    }

    /// Append an asset to the record stored under `tail`.
    ///
    /// Fails with [`RecordError::RecordNotFound`] if no record exists and
    /// [`RecordError::DuplicateAsset`] if the id is already taken; in both
    /// cases nothing is written.
    pub fn insert_asset(&self, tail: &TailNumber, asset: Asset) -> RecordResult<()> {
        let mut record = self.flight_record(tail)?;
        let asset_id = asset.asset_id.clone();
        mutate::insert_asset(&mut record, asset)?;
        self.store_record(&record)?;
        debug!(tail = %tail, asset_id = %asset_id, "inserted asset");
        Ok(())
    }

    /// Overwrite the mutable fields of the asset matching `update.asset_id`.
    ///
    /// When no asset matches, the stored record is left byte-for-byte
    /// unchanged and the operation still succeeds with
    /// [`UpdateOutcome::NoMatch`] (see [`mutate::update_asset`] for why).
    pub fn update_asset(&self, tail: &TailNumber, update: &Asset) -> RecordResult<UpdateOutcome> {
        let mut record = self.flight_record(tail)?;
        match mutate::update_asset(&mut record, update) {
            UpdateOutcome::Updated => {
                self.store_record(&record)?;
                debug!(tail = %tail, asset_id = %update.asset_id, "updated asset");
                Ok(UpdateOutcome::Updated)
            }
            UpdateOutcome::NoMatch => {
                debug!(
                    tail = %tail,
                    asset_id = %update.asset_id,
                    "update matched no asset; record left unchanged"
                );
                Ok(UpdateOutcome::NoMatch)
            }
        }
    }

    /// Project the asset matching `asset_id` out of the record for `tail`.
    ///
    /// A missing asset is not an error; the projection carries the
    /// zero-valued asset.
    pub fn asset_for_flight(&self, tail: &TailNumber, asset_id: &str) -> RecordResult<AssetLookup> {
        let record = self.flight_record(tail)?;
        Ok(AssetLookup::from_record(&record, asset_id))
    }

    /// Read and decode the full record for `tail`.
    pub fn flight_record(&self, tail: &TailNumber) -> RecordResult<FlightRecord> {
        let bytes = self
            .store
            .get(tail.as_str())?
            .ok_or_else(|| RecordError::RecordNotFound(tail.to_string()))?;
        decode_record(tail.as_str(), &bytes)
    }

    /// Write a composite index entry and return the key it was stored under.
    ///
    /// Unused by any query path; kept so hosts with prefix-scan support can
    /// index records for future range queries.
    pub fn write_index(&self, index_name: &str, attributes: &[&str]) -> RecordResult<String> {
        let key = composite_key(index_name, attributes)?;
        self.store.put(&key, &INDEX_SENTINEL)?;
        debug!(index = index_name, key_len = key.len(), "wrote index entry");
        Ok(key)
    }

    fn store_record(&self, record: &FlightRecord) -> RecordResult<()> {
        let bytes = encode_record(record)?;
        self.store.put(record.tail_number.as_str(), &bytes)?;
        Ok(())
    }
}

impl std::fmt::Debug for FlightRecordRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightRecordRepository").finish_non_exhaustive()
    }
}
