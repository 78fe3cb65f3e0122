//! Typed commands and the string-argument boundary.

use atl_types::{Asset, TailNumber};

use crate::error::InvokeError;

/// One invocation, parsed and validated.
///
/// Each variant corresponds to a function in the external dispatch table;
/// everything past [`Command::parse`] works with typed values only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `initFlightRecord [tailNumber]` — create or destructively reset.
    InitFlightRecord { tail_number: TailNumber },
    /// `insertAsset [tailNumber, assetID, manufacturer, onWarranty, status]`
    InsertAsset { tail_number: TailNumber, asset: Asset },
    /// `updateAsset` — same shape as insert; no-op when the id is absent.
    UpdateAsset { tail_number: TailNumber, asset: Asset },
    /// `getAssets [tailNumber, assetID]` — asset-by-id projection.
    GetAssets {
        tail_number: TailNumber,
        asset_id: String,
    },
    /// `getFlightRecord [tailNumber]` — the full decoded record.
    GetFlightRecord { tail_number: TailNumber },
}

impl Command {
    /// Parse a function name and positional string arguments.
    ///
    /// Validates the argument count, rejects empty arguments (positions are
    /// 1-based in errors), and parses the warranty flag as a
    /// case-insensitive `"true"`/`"false"`.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, InvokeError> {
        match function {
            "initFlightRecord" => {
                expect_args(function, args, 1)?;
                Ok(Self::InitFlightRecord {
                    tail_number: tail_arg(args, 0)?,
                })
            }
            "insertAsset" => {
                let (tail_number, asset) = asset_args(function, args)?;
                Ok(Self::InsertAsset { tail_number, asset })
            }
            "updateAsset" => {
                let (tail_number, asset) = asset_args(function, args)?;
                Ok(Self::UpdateAsset { tail_number, asset })
            }
            "getAssets" => {
                expect_args(function, args, 2)?;
                Ok(Self::GetAssets {
                    tail_number: tail_arg(args, 0)?,
                    asset_id: required_arg(args, 1)?.to_string(),
                })
            }
            "getFlightRecord" => {
                expect_args(function, args, 1)?;
                Ok(Self::GetFlightRecord {
                    tail_number: tail_arg(args, 0)?,
                })
            }
            other => Err(InvokeError::UnknownFunction(other.to_string())),
        }
    }

    /// The external function name this command was parsed from.
    pub fn function_name(&self) -> &'static str {
        match self {
            Self::InitFlightRecord { .. } => "initFlightRecord",
            Self::InsertAsset { .. } => "insertAsset",
            Self::UpdateAsset { .. } => "updateAsset",
            Self::GetAssets { .. } => "getAssets",
            Self::GetFlightRecord { .. } => "getFlightRecord",
        }
    }
}

/// Shared five-argument shape of insert and update.
fn asset_args(function: &str, args: &[String]) -> Result<(TailNumber, Asset), InvokeError> {
    expect_args(function, args, 5)?;
    let tail_number = tail_arg(args, 0)?;
    let asset = Asset::new(
        required_arg(args, 1)?,
        required_arg(args, 2)?,
        bool_arg(args, 3)?,
        required_arg(args, 4)?,
    );
    Ok((tail_number, asset))
}

fn expect_args(function: &str, args: &[String], expected: usize) -> Result<(), InvokeError> {
    if args.len() != expected {
        return Err(InvokeError::ArgumentCount {
            function: function.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

fn required_arg(args: &[String], position: usize) -> Result<&str, InvokeError> {
    let value = args[position].as_str();
    if value.is_empty() {
        return Err(InvokeError::EmptyArgument {
            position: position + 1,
        });
    }
    Ok(value)
}

fn tail_arg(args: &[String], position: usize) -> Result<TailNumber, InvokeError> {
    let value = required_arg(args, position)?;
    TailNumber::new(value).map_err(|_| InvokeError::EmptyArgument {
        position: position + 1,
    })
}

fn bool_arg(args: &[String], position: usize) -> Result<bool, InvokeError> {
    let value = required_arg(args, position)?;
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(InvokeError::InvalidBoolean {
            position: position + 1,
            value: value.to_string(),
        }),
    }
}
