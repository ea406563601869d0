//! clubboard - CLI entry point

use clap::Parser;
use clubboard::cli::{self, Cli, Commands, OutputFormat};
use clubboard::logging::{self, LogSink};
use clubboard::{ConfigLoader, Result};
use colored::Colorize;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let command = args.command.unwrap_or(Commands::Watch {
        layout: None,
        interval_ms: None,
    });

    let (mut config, load_error) = ConfigLoader::new().load_or_default().await;

    // Logs may be discarded below, so say it on stderr before the dashboard starts
    if let Some(e) = &load_error {
        eprintln!("{}", cli::config::fallback_notice(e).yellow());
    }

    // The dashboard owns the terminal, so its logs go to a file or nowhere
    let level = if args.verbose {
        Level::DEBUG
    } else {
        logging::parse_level(&config.ui.log_level)
    };
    let sink = match (&command, &config.ui.log_file) {
        (Commands::Watch { .. }, Some(path)) => LogSink::File(path.clone()),
        (Commands::Watch { .. }, None) => LogSink::Discard,
        _ => LogSink::Stderr,
    };
    logging::init(level, sink)?;

    info!("Starting clubboard version {}", clubboard::version::VERSION);
    if let Some(e) = load_error {
        warn!("Failed to load config: {}, using defaults", e);
    }

    match command {
        Commands::Watch {
            layout,
            interval_ms,
        } => {
            if let Some(layout) = layout {
                config.ui.layout = layout;
            }
            if let Some(interval_ms) = interval_ms {
                config.poll.interval_ms = interval_ms;
            }
            config.validate()?;

            let source = cli::connect(&config, args.api_key.as_deref())?;
            clubboard::tui::run(&config, source).await?;
        }
        Commands::Show { format, json } => {
            let format = if json { OutputFormat::Json } else { format };
            if format != OutputFormat::Table || !config.ui.colored_output {
                colored::control::set_override(false);
            }
            let source = cli::connect(&config, args.api_key.as_deref())?;
            cli::show::handle_show(&config, source.as_ref(), format).await?;
        }
        Commands::Config => {
            cli::config::handle_show_config(&config)?;
        }
        Commands::Init { force } => {
            cli::config::handle_init(force).await?;
        }
    }

    Ok(())
}
