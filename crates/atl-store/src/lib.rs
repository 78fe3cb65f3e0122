//! Key-value state storage for the Asset Trace Ledger.
//!
//! ATL treats the transactional ledger of record as an external
//! collaborator. This crate defines the minimal contract the core consumes
//! ([`StateStore`]: `get`/`put` over string keys and byte values) and
//! ships two implementations:
//!
//! - [`InMemoryStateStore`] — `HashMap`-based store for tests and embedding
//! - [`FileStateStore`] — single-file JSON store with atomic writes, used
//!   by the CLI when no host ledger is present
//!
//! # Design Rules
//!
//! 1. The store never interprets values; it is a pure key-value store.
//! 2. `get` of a missing key is `Ok(None)`, never an error.
//! 3. `put` overwrites unconditionally; there is no delete path.
//! 4. All I/O errors are propagated, never silently ignored.
//! 5. Atomicity across keys is whatever the backend gives; the core never
//!    assumes more than per-key write atomicity.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileStateStore;
pub use memory::InMemoryStateStore;
pub use traits::StateStore;
