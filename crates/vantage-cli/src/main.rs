#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]
#![allow(clippy::unused_async)]

use anyhow::Context;
use clap::Parser;

use vantage_config::VantageConfig;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("vantage error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let default_level = if matches!(cli.command, cli::Commands::Serve(_)) {
        "info"
    } else {
        "warn"
    };
    init_tracing(cli.quiet, cli.verbose, default_level)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = VantageConfig::load_with_dotenv().context("failed to load configuration")?;
    context::warn_unconfigured(&config);

    if let cli::Commands::Serve(args) = &cli.command {
        return commands::serve::handle(args, config).await;
    }

    let mut ctx = context::AppContext::init(config, &flags)
        .context("failed to initialize vantage application context")?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool, default_level: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        default_level
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VANTAGE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
