use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use std::io;

use asset_report::{config::Config, generate_report, logging, write_report, LunchMoneyClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_level).context("Failed to install logger")?;

    log::info!("asset-report {} using {}", asset_report::VERSION, config.api_url);

    let client = LunchMoneyClient::with_base_url(config.token.clone(), config.api_url.clone())?;
    let lines = generate_report(&client).await?;

    let stdout = io::stdout();
    let mode = config.color_mode(stdout.is_tty());
    let mut out = stdout.lock();
    write_report(&mut out, &lines, mode)?;

    Ok(())
}
