mod app_system;
mod clients;
mod config;
mod domain;
mod error;
mod manager_actor;
mod remote;
mod shell;
mod view;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, ProductManagerSystem};
use crate::config::Config;

// One thread: every state change and every request completion runs here.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::parse();
    info!(base_url = %config.base_url, delete_policy = ?config.delete_policy, "Starting product manager");

    let system = ProductManagerSystem::start(&config);

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let result = shell::run(&system.client, input, tokio::io::stdout()).await;
    if let Err(e) = &result {
        error!(error = %e, "Shell stopped on I/O error");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    result.map_err(|e| e.to_string())
}
