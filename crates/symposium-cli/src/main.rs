//! Symposium CLI - Command-line interface for the Symposium enrichment pipeline.

use clap::Parser;
use symposium_cli::commands;
use symposium_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` applies unless `--verbose` asks for debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> symposium_cli::Result<()> {
    // Load or create config
    let config = Config::load_or_create(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Facts(args) => commands::execute_facts(args, &config, &formatter).await?,
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter).await?,
        Command::Suggest(args) => commands::execute_suggest(args, &config, &formatter).await?,
        Command::Material(args) => commands::execute_material(args, &config, &formatter).await?,
        Command::Segment(args) => commands::execute_segment(args, &formatter).await?,
        Command::Prompt(args) => commands::execute_prompt(args, &config, &formatter).await?,
    }

    Ok(())
}
