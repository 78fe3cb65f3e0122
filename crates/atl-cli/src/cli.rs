use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "atl",
    about = "Asset Trace Ledger — aircraft asset tracking over a key-value ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the state file standing in for the host ledger.
    #[arg(long, global = true, default_value = "atl-state.json")]
    pub state: String,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize the configured seed flight records (destructive)
    Bootstrap(BootstrapArgs),
    /// Create or destructively reset one flight record
    Init(InitArgs),
    /// Insert an asset into a flight record
    Insert(AssetArgs),
    /// Update an existing asset in place
    Update(AssetArgs),
    /// Look up one asset within a flight record
    GetAsset(GetAssetArgs),
    /// Show the full flight record
    GetRecord(GetRecordArgs),
    /// Invoke a raw function name with positional string arguments
    Invoke(InvokeArgs),
}

#[derive(Args)]
pub struct BootstrapArgs {
    /// TOML file with the seed tail numbers; built-in seeds when omitted.
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Args)]
pub struct InitArgs {
    pub tail_number: String,
}

#[derive(Args)]
pub struct AssetArgs {
    pub tail_number: String,
    pub asset_id: String,
    pub manufacturer: String,
    /// "true" or "false" (case-insensitive)
    pub on_warranty: String,
    pub status: String,
}

#[derive(Args)]
pub struct GetAssetArgs {
    pub tail_number: String,
    pub asset_id: String,
}

#[derive(Args)]
pub struct GetRecordArgs {
    pub tail_number: String,
}

#[derive(Args)]
pub struct InvokeArgs {
    pub function: String,
    pub args: Vec<String>,
}
