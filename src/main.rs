//! Assessa CLI - Replay and inspect candidate assessment wizard sessions

use assessa::cli::{Cli, Commands};
use assessa::errors::to_exit_code;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        "debug"
    } else if cli.quiet || matches!(cli.command, Some(Commands::Watch { .. })) {
        // Log lines would tear through the terminal view
        "warn"
    } else {
        "info"
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(&cli)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> assessa::Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Some(Commands::Run {
            script,
            json,
            output,
            instant,
            score,
        }) => {
            assessa::cli::commands::run::run(config, &script, json, output.as_deref(), instant, score)
                .await
        }
        Some(Commands::Check { profile, json }) => {
            assessa::cli::commands::check::run(&profile, json).await
        }
        Some(Commands::Document {
            snapshot,
            kind,
            output,
            templates,
        }) => {
            assessa::cli::commands::document::run(
                &snapshot,
                kind,
                output.as_deref(),
                templates.as_deref(),
            )
            .await
        }
        Some(Commands::Watch { script, score }) => {
            assessa::cli::commands::watch::run(config, &script, score).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
