use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use anyhow::Result;
use parley_runtime::Config;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Models { all } => handlers::models::list(all, cli.format),

        Commands::Cost {
            model,
            prompt_tokens,
            completion_tokens,
        } => handlers::cost::estimate(&model, prompt_tokens, completion_tokens, cli.format),

        Commands::New { title, folder } => handlers::chat::new_chat(
            &config_path(cli.data_dir.as_deref())?,
            title.as_deref(),
            folder.as_deref(),
            cli.format,
        ),

        Commands::Config { command } => {
            let config_path = config_path(cli.data_dir.as_deref())?;
            match command {
                ConfigCommand::Show => handlers::config::show(&config_path, cli.format),
                ConfigCommand::Init { force } => {
                    handlers::config::init(&config_path, force, cli.format)
                }
            }
        }

        Commands::Languages => handlers::languages::list(cli.format),
    }
}

// Only commands that read or write the config file need a workspace
fn config_path(data_dir: Option<&str>) -> Result<PathBuf> {
    let config_path = Config::default_path(data_dir)?;
    tracing::debug!(config = %config_path.display(), "resolved config path");
    Ok(config_path)
}
