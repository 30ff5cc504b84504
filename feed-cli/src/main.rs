//! CVI feed console
//!
//! Pages through a review list from the terminal. Reviews print to stdout;
//! logs go to stderr. Pressing enter scrolls to the end of the list, which
//! loads the next page when one is available.
//!
//! Configuration comes from the environment (or `.env`):
//! - CVI_API_URL: Base URL of the review API
//! - CVI_ACCESS_TOKEN: Access token (optional; `login <token>` also works)
//! - CVI_FEED: likes | mine | all
//! - CVI_PAGE_SIZE, CVI_REQUEST_TIMEOUT_SECS

mod command;
mod console;

use std::sync::Arc;

use anyhow::{Context, Result};
use cvi_feed::{FeedConfig, FeedController, FeedHandle, FeedSession, ReviewApiClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use command::{help_text, parse_command, ConsoleCommand};
use console::ConsoleRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for the feed itself)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,cvi_feed=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FeedConfig::from_env().context("Invalid feed configuration")?;
    tracing::info!(
        api_url = %config.api_url,
        feed = %config.feed,
        page_size = config.page_size.get(),
        signed_in = config.access_token.is_some(),
        "Starting CVI feed console"
    );

    let client = ReviewApiClient::from_config(&config).context("Failed to create API client")?;
    let renderer = ConsoleRenderer::new(config.feed);
    let handle = FeedSession::spawn(
        FeedController::new(config.page_size),
        Arc::new(client),
        Arc::new(renderer),
    );

    handle.initialize(config.access_token.clone())?;
    read_commands(&handle).await?;

    // Unmount: late pages are dropped
    handle.dispose().ok();
    handle.closed().await;

    Ok(())
}

async fn read_commands(handle: &FeedHandle) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_command(&line) {
            Ok(ConsoleCommand::More) => {
                // Scroll down to the sentinel, then back up
                handle.sentinel_visibility(true)?;
                handle.sentinel_visibility(false)?;
            }
            Ok(ConsoleCommand::Retry) => handle.retry()?,
            Ok(ConsoleCommand::Login(credential)) => handle.set_credential(Some(credential))?,
            Ok(ConsoleCommand::Logout) => handle.set_credential(None)?,
            Ok(ConsoleCommand::Help) => println!("{}", help_text()),
            Ok(ConsoleCommand::Quit) => break,
            Err(e) => {
                eprintln!("{}", e);
                println!("{}", help_text());
            }
        }
    }

    Ok(())
}
