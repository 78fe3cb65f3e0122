//! Invocation surface for the Asset Trace Ledger (ATL).
//!
//! An external host hands ATL a function name and positional string
//! arguments. This crate turns that pair into a typed [`Command`] at the
//! boundary (argument count, non-empty checks, and boolean parsing all
//! happen in [`Command::parse`], so unknown functions and malformed
//! arguments fail with typed errors instead of free-form strings) and the
//! [`Dispatcher`] executes commands against a
//! [`FlightRecordRepository`](atl_records::FlightRecordRepository).
//!
//! Response convention: mutations succeed with no payload; queries succeed
//! with the encoded projection or record as the payload; failures are
//! [`InvokeError`] values whose `Display` is the human-readable message.
//!
//! [`Dispatcher::bootstrap`] initializes the configured seed tail numbers
//! at first install.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;

pub use command::Command;
pub use config::BootstrapConfig;
pub use dispatch::{Dispatcher, Response};
pub use error::{InvokeError, InvokeResult};
