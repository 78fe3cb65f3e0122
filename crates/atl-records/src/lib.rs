//! Flight record core for the Asset Trace Ledger (ATL).
//!
//! This crate is the heart of ATL. Everything with a real invariant lives
//! here: reading a [`FlightRecord`](atl_types::FlightRecord) from the state
//! store, validating and applying an insert or update to its asset list,
//! enforcing asset-id uniqueness, and writing the record back. It provides:
//!
//! - JSON encode/decode of stored records ([`codec`])
//! - Pure asset-list mutators with the uniqueness check ([`mutate`])
//! - The asset-lookup response projection ([`query`])
//! - Composite index keys for future range queries ([`index`])
//! - [`FlightRecordRepository`] orchestrating one get→decode→mutate→encode→put
//!   cycle per operation against any [`StateStore`](atl_store::StateStore)
//!
//! Each operation touches exactly one ledger key. Isolation between
//! concurrent invocations on the same key is the host store's concern; the
//! repository performs no version check of its own.

pub mod codec;
pub mod error;
pub mod index;
pub mod mutate;
pub mod query;
pub mod repository;

pub use codec::{decode_record, encode_record};
pub use error::{RecordError, RecordResult};
pub use index::{composite_key, INDEX_SENTINEL};
pub use mutate::UpdateOutcome;
pub use query::AssetLookup;
pub use repository::FlightRecordRepository;
