use std::sync::Arc;

use colored::Colorize;

use atl_invoke::{BootstrapConfig, Dispatcher};
use atl_store::FileStateStore;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(Arc::new(FileStateStore::new(&cli.state)));
    let format = &cli.format;

    match cli.command {
        Command::Bootstrap(args) => cmd_bootstrap(&dispatcher, args),
        Command::Init(args) => {
            invoke(&dispatcher, format, "initFlightRecord", vec![args.tail_number])
        }
        Command::Insert(args) => invoke(&dispatcher, format, "insertAsset", asset_args(args)),
        Command::Update(args) => invoke(&dispatcher, format, "updateAsset", asset_args(args)),
        Command::GetAsset(args) => invoke(
            &dispatcher,
            format,
            "getAssets",
            vec![args.tail_number, args.asset_id],
        ),
        Command::GetRecord(args) => {
            invoke(&dispatcher, format, "getFlightRecord", vec![args.tail_number])
        }
        Command::Invoke(args) => invoke(&dispatcher, format, &args.function, args.args),
    }
}

fn asset_args(args: AssetArgs) -> Vec<String> {
    vec![
        args.tail_number,
        args.asset_id,
        args.manufacturer,
        args.on_warranty,
        args.status,
    ]
}

fn cmd_bootstrap(dispatcher: &Dispatcher, args: BootstrapArgs) -> anyhow::Result<()> {
    let config: BootstrapConfig = match args.config {
        Some(path) => toml::from_str(&std::fs::read_to_string(&path)?)?,
        None => BootstrapConfig::default(),
    };
    dispatcher.bootstrap(&config)?;
    println!(
        "{} Bootstrapped {} flight record(s)",
        "✓".green().bold(),
        config.seed_tail_numbers.len()
    );
    for tail in &config.seed_tail_numbers {
        println!("  {}", tail.yellow());
    }
    Ok(())
}

fn invoke(
    dispatcher: &Dispatcher,
    format: &OutputFormat,
    function: &str,
    args: Vec<String>,
) -> anyhow::Result<()> {
    let response = dispatcher.invoke_raw(function, &args)?;
    match response.payload {
        Some(payload) => print_payload(format, &payload)?,
        None => println!("{} {}", "✓".green().bold(), function),
    }
    Ok(())
}

fn print_payload(format: &OutputFormat, payload: &[u8]) -> anyhow::Result<()> {
    let value: serde_json::Value = serde_json::from_slice(payload)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}
