//! Foundation types for the Asset Trace Ledger (ATL).
//!
//! This crate provides the core entity types shared by every other ATL
//! crate. A [`FlightRecord`] is the unit of storage: one record per
//! aircraft, keyed by its [`TailNumber`], owning an ordered list of
//! [`Asset`] entries (the parts and components fitted to that aircraft).
//!
//! # Key Types
//!
//! - [`TailNumber`] — Aircraft identifier; the primary key of a record.
//!   Guaranteed non-empty by construction.
//! - [`Asset`] — A tracked component. `asset_id` is unique within its
//!   parent record and immutable once inserted.
//! - [`FlightRecord`] — The stored entity; carries the `"record"` object
//!   type tag and the asset list in insertion order.
//!
//! Wire field names (`objType`, `tailNumber`, `Assets`, `AssetID`, ...)
//! match the ledger entries written by earlier deployments, so existing
//! stored records decode unchanged.

pub mod error;
pub mod record;
pub mod tail;

pub use error::TypeError;
pub use record::{Asset, FlightRecord, RECORD_OBJECT_TYPE};
pub use tail::TailNumber;
