//! Terjemah - Indonesian to English Translation
//!
//! Command line entry point for the translation fallback chain.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{Level, info};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use terjemah::cli::{Args, Commands};
use terjemah::config::{Config, DEFAULT_CONFIG_FILE};
use terjemah::dictionary::PhraseDictionary;
use terjemah::error::TerjemahError;
use terjemah::orchestrator::TranslationOrchestrator;
use terjemah::report::empty_input_message;
use terjemah::session::{Session, render_examples, render_result};
use terjemah::translate::ProviderKind;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
                info!("Found {} in current directory, loading...", DEFAULT_CONFIG_FILE);
                Config::from_file(DEFAULT_CONFIG_FILE)?
            } else {
                Config::default()
            }
        }
    };

    let show_spinner = std::io::stderr().is_terminal();

    match args.command {
        Commands::Translate { text, json } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    tokio::io::stdin().read_to_string(&mut buffer).await?;
                    buffer
                }
            };

            let orchestrator = TranslationOrchestrator::from_config(&config)?;
            let session = Session::new(&orchestrator, show_spinner && !json);

            match session.translate(&text).await? {
                Some(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Some(result) => {
                    print!("{}", render_result(&result));
                }
                None => {
                    eprintln!("{}", empty_input_message());
                    return Err(TerjemahError::EmptyInput.into());
                }
            }
        }
        Commands::Interactive => {
            let orchestrator = TranslationOrchestrator::from_config(&config)?;
            let session = Session::new(&orchestrator, show_spinner);
            session
                .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await?;
        }
        Commands::Examples => {
            print!("{}", render_examples());
        }
        Commands::Lookup { text } => {
            if text.trim().is_empty() {
                eprintln!("{}", empty_input_message());
                return Err(TerjemahError::EmptyInput.into());
            }
            let dictionary = PhraseDictionary::with_extra(&config.dictionary.phrases);
            println!("{}", dictionary.lookup(&text));
        }
        Commands::Providers => {
            let orchestrator = TranslationOrchestrator::from_config(&config)?;
            println!("\nFallback chain:");
            for (idx, kind) in orchestrator.chain().iter().enumerate() {
                let detail = match kind {
                    ProviderKind::MyMemory => config.mymemory.endpoint.clone(),
                    ProviderKind::LibreTranslate => {
                        config.libretranslate.endpoint.clone()
                    }
                    ProviderKind::Dictionary => format!(
                        "{} built-in and custom phrases",
                        orchestrator.dictionary().map(|d| d.len()).unwrap_or_default()
                    ),
                    ProviderKind::None => String::new(),
                };
                println!("{:<3} {:<15} {}", idx + 1, kind.to_string(), detail);
            }
            println!("Timeout per provider: {}s", config.translate.timeout_secs);
        }
        Commands::InitConfig { path, force } => {
            if path.exists() && !force {
                return Err(TerjemahError::Config(format!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                ))
                .into());
            }
            Config::default().save_to_file(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".terjemah").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "terjemah.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Console stays quiet unless asked, results go to stdout
    let console_level = if verbose { Level::DEBUG } else { Level::WARN };
    let file_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_filter(EnvFilter::from_default_env().add_directive(console_level.into()));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false) // No ANSI colors in file
        .with_filter(file_level);

    let subscriber = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer);

    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        "Logging initialized - console: {}, file: {}",
        console_level,
        log_dir.join("terjemah.log").display()
    );

    Ok(())
}
