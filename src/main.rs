use anyhow::Context;
use clap::Parser;
use std::path::Path;

use rust_passgen::cli::{self, Args};
use rust_passgen::core::config::Config;
use rust_passgen::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config).context("Failed to initialise logging")?;

    for rejected in &config.rejected {
        log::warn!("{}, using default", rejected);
    }
    log::debug!("Command line args: {:?}", args);

    cli::handlers::handle_generate(&args, &config)
}
