use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate Indonesian text to English
    Translate {
        /// Text to translate (read from stdin when omitted)
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate line by line in an interactive session
    Interactive,

    /// List example texts
    Examples,

    /// Translate with the offline phrase dictionary only
    Lookup {
        /// Text to look up
        text: String,
    },

    /// Show the configured fallback chain
    Providers,

    /// Write the default configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = "terjemah.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
