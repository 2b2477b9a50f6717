/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: JSON response of one API call on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use bittrex_adapter::ApiResponse;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bittrex_cli::{CliConfig, Command};

#[derive(Parser, Debug)]
#[command(name = "bittrex-cli", version, about = "Bittrex v1.1 REST API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Override the configured API root
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    /// Dry-run trading commands
    #[arg(long, conflicts_with = "live")]
    simulate: bool,
    /// Send trading commands to the exchange
    #[arg(long)]
    live: bool,
    /// Skip cache lookups for this run
    #[arg(long = "no-cache")]
    no_cache: bool,
    /// Fail when the exchange reports `success: false` and print only `result`
    #[arg(long)]
    unwrap: bool,
    /// Print compact JSON
    #[arg(long)]
    compact: bool,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = match &args.config_path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if args.simulate {
        config.simulation = true;
    }
    if args.live {
        config.simulation = false;
    }
    if args.no_cache {
        config.cached = false;
    }

    info!(
        base_url = %config.base_url,
        simulation = config.simulation,
        cached = config.cached,
        authenticated = config.has_credentials(),
        "configuration loaded"
    );

    if args.command.is_trade() && !config.simulation {
        info!(command = ?args.command, "sending live trade");
    }

    let client = config.build_client()?;
    let response = args
        .command
        .execute(&client)
        .await
        .with_context(|| format!("{:?} failed", args.command))?;

    let output = match response {
        Some(value) if args.unwrap => ApiResponse::from_value(&value)?.into_result()?,
        Some(value) => value,
        None => {
            debug!(command = ?args.command, "simulated, nothing sent");
            serde_json::Value::Null
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
