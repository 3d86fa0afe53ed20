pub mod cli;
pub mod config;
pub mod gemini;
pub mod http_errors;
pub mod logging;
pub mod outcome;
pub mod prompt;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use reqwest::Client;
use tracing::info;

/// Runs one resolve-invoke-print cycle and returns the process exit code.
pub async fn run() -> Result<u8> {
    dotenvy::dotenv().ok();

    let args = cli::Cli::parse();
    let cfg = config::Config::from_env();
    info!(
        model = %args.model,
        base_url = %cfg.base_url,
        api_key_present = cfg.api_key.is_some(),
        "loaded runtime configuration"
    );

    let Some(prompt) = prompt::resolve(&args.prompt_parts)? else {
        eprintln!("Error: No prompt provided either as argument or via stdin.");
        eprintln!("{}", cli::Cli::command().render_help());
        return Ok(1);
    };

    let client = Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .context("Failed to initialize HTTP client")?;

    let result = gemini::generate(&client, &cfg, &args.model, &prompt).await;
    match &result {
        Ok(answer) => println!("{answer}"),
        Err(err) => println!("{err}"),
    }
    Ok(outcome::exit_code(&result))
}
