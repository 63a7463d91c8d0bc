use midas_bot::client::{HttpTransport, MidasClient};
use midas_bot::config::MidasConfig;
use midas_bot::worker::AccountWorker;

use anyhow::Result;
use clap::Parser;
use core_logic::{setup_logger, AccountFile, CycleRunner, TokioClock};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "bots/midas/config.toml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = setup_logger();
    // Keep guard alive for file logging
    std::mem::forget(_log_guard);
    dotenv().ok();

    let args = Args::parse();

    // An explicit --config must exist; only the stock path may be absent.
    let loaded = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path);
            MidasConfig::load(path)
        }
        None => {
            info!("Loading config from: {}", DEFAULT_CONFIG_PATH);
            MidasConfig::load_or_default(DEFAULT_CONFIG_PATH)
        }
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Ok(());
        }
    };

    let run_config = config.to_run_config();
    info!("Target API: {}", run_config.base_url);

    let transport = Arc::new(HttpTransport::new()?);
    let client = MidasClient::new(transport, run_config.base_url.clone());
    let accounts = Arc::new(AccountFile::new(run_config.data_file.clone()));
    let clock = Arc::new(TokioClock);

    let cycle_interval = run_config.cycle_interval();
    let worker = AccountWorker::new(client, accounts, clock.clone(), run_config);

    let runner = CycleRunner::new(clock);
    runner.run(Box::new(worker), cycle_interval).await?;

    Ok(())
}
