//! pokepay-prepare - Prepare a partner API call from the command line
//!
//! Builds one endpoint's request from a JSON parameter object and prints the
//! prepared call (method, URL, request data, timestamp, call id) as JSON. The
//! output is what a dispatcher would seal and send.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Parse arguments
//! 3. Load configuration from environment variables
//! 4. Read the parameter object from a file, stdin, or default to `{}`
//! 5. Prepare the call and print it

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use pokepay_partner::Config;
use pokepay_partner::requests::{ENDPOINTS, prepare_by_name};

#[derive(Parser, Debug)]
#[command(name = "pokepay-prepare")]
#[command(about = "Prepare a Pokepay partner API call without sending it")]
#[command(version)]
struct Cli {
    /// Endpoint name, e.g. create_transaction
    #[arg(required_unless_present = "list")]
    endpoint: Option<String>,

    /// JSON parameter object; `-` reads stdin
    #[arg(short, long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// List every endpoint name and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        for name in ENDPOINTS {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(endpoint) = cli.endpoint else {
        anyhow::bail!("an endpoint name is required");
    };

    let config = Config::from_env().context("failed to load POKEPAY_* configuration")?;
    tracing::info!(base_url = %config.api_base_url, "Configuration loaded");

    let params = read_params(cli.params.as_ref())?;
    let prepared = prepare_by_name(&config, &endpoint, params)
        .with_context(|| format!("failed to prepare {endpoint}"))?;

    tracing::info!(
        endpoint = prepared.endpoint,
        partner_call_id = %prepared.partner_call_id,
        "Request prepared"
    );

    println!("{}", serde_json::to_string_pretty(&prepared)?);
    Ok(())
}

fn read_params(source: Option<&PathBuf>) -> anyhow::Result<Value> {
    let raw = match source {
        None => return Ok(Value::Object(Default::default())),
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read parameters from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
    };

    serde_json::from_str(&raw).context("parameters are not valid JSON")
}
