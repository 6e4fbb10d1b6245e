use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shop_cli::cli::{args::Args, commands::CliApp};
use shop_cli::utils::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!(
        "shop-cli starting in {} environment",
        config.environment
    );

    let data_file = args.data_file.clone();
    let mut app = CliApp::new(&config, data_file)?;
    app.run(args)?;

    tracing::info!("shop-cli stopped");
    Ok(())
}
