//! Command execution against the record repository.

use std::sync::Arc;

use tracing::{debug, info, warn};

use atl_records::{encode_record, FlightRecordRepository, RecordError};
use atl_store::StateStore;
use atl_types::TailNumber;

use crate::command::Command;
use crate::config::BootstrapConfig;
use crate::error::InvokeResult;

/// A successful invocation result.
///
/// Mutations carry no payload; queries carry the encoded projection or
/// record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub payload: Option<Vec<u8>>,
}

impl Response {
    /// Success with no payload.
    pub fn ok() -> Self {
        Self { payload: None }
    }

    /// Success carrying the given payload bytes.
    pub fn with_payload(payload: Vec<u8>) -> Self {
        Self {
            payload: Some(payload),
        }
    }
}

/// Executes parsed commands against a [`FlightRecordRepository`].
pub struct Dispatcher {
    repository: FlightRecordRepository,
}

impl Dispatcher {
    /// Create a dispatcher over the given state store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            repository: FlightRecordRepository::new(store),
        }
    }

    /// The underlying repository, for callers needing typed access.
    pub fn repository(&self) -> &FlightRecordRepository {
        &self.repository
    }

    /// Parse and execute a raw function-name + positional-argument pair.
    ///
    /// This is the original external entry point, kept on top of the typed
    /// [`Command`] surface.
    pub fn invoke_raw(&self, function: &str, args: &[String]) -> InvokeResult<Response> {
        self.invoke(Command::parse(function, args)?)
    }

    /// Execute one command: exactly one get/put cycle on one ledger key.
    pub fn invoke(&self, command: Command) -> InvokeResult<Response> {
        debug!(function = command.function_name(), "invoke");
        match command {
            Command::InitFlightRecord { tail_number } => {
                if self.repository.exists(&tail_number)? {
                    warn!(
                        tail = %tail_number,
                        "re-initializing an existing flight record; its assets will be lost"
                    );
                }
                self.repository.init_record(&tail_number)?;
                Ok(Response::ok())
            }
            Command::InsertAsset { tail_number, asset } => {
                self.repository.insert_asset(&tail_number, asset)?;
                Ok(Response::ok())
            }
            Command::UpdateAsset { tail_number, asset } => {
                // NoMatch is still success at this surface; the repository
                // has already logged it.
                self.repository.update_asset(&tail_number, &asset)?;
                Ok(Response::ok())
            }
            Command::GetAssets {
                tail_number,
                asset_id,
            } => {
                let lookup = self.repository.asset_for_flight(&tail_number, &asset_id)?;
                Ok(Response::with_payload(lookup.encode()?))
            }
            Command::GetFlightRecord { tail_number } => {
                let record = self.repository.flight_record(&tail_number)?;
                Ok(Response::with_payload(encode_record(&record)?))
            }
        }
    }

    /// Initialize a record for every configured seed tail number.
    ///
    /// Destructive for any seed that already has a record; not safe to
    /// re-run against production state.
    pub fn bootstrap(&self, config: &BootstrapConfig) -> InvokeResult<()> {
        for seed in &config.seed_tail_numbers {
            let tail_number = TailNumber::new(seed.clone()).map_err(|_| {
                RecordError::Validation("seed tail number must be a non-empty string".to_string())
            })?;
            self.invoke(Command::InitFlightRecord { tail_number })?;
        }
        info!(
            count = config.seed_tail_numbers.len(),
            "bootstrapped seed flight records"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
