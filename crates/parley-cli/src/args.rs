use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Browse the model catalog and create chats from session defaults", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (defaults to $PARLEY_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List selectable models with their token limits and pricing
    Models {
        /// Include dated snapshot models
        #[arg(long)]
        all: bool,
    },

    /// Estimate the cost of a request
    Cost {
        model: String,

        #[arg(long, default_value = "0")]
        prompt_tokens: u64,

        #[arg(long, default_value = "0")]
        completion_tokens: u64,
    },

    /// Create a chat from the configured defaults and print it
    New {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        folder: Option<String>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// List syntax-highlighting language tags
    Languages,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective session defaults
    Show,

    /// Write config.toml populated with the current defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
