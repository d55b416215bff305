use crate::handlers::HandlerContext;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};
use crate::types::OutputFormat;
use anyhow::Result;
use parley_runtime::{Config, SessionDefaults};
use std::path::Path;

pub fn show(config_path: &Path, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let file_exists = config_path.exists();
    let defaults = Config::load_from(config_path)?.session_defaults()?;

    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path: config_path.to_path_buf(),
        file_exists,
        defaults,
    });

    if !file_exists {
        result = result
            .with_badge(StatusBadge::warning("Using built-in defaults"))
            .with_suggestion(
                Guidance::new("Write a config file to customize defaults")
                    .with_command("parley config init"),
            );
    }

    ctx.render(result)
}

pub fn init(config_path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let existed = config_path.exists();
    if existed && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::from_defaults(&SessionDefaults::from_env()).save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote config");

    ctx.render(
        CommandResultViewModel::new(ConfigInitViewModel {
            path: config_path.to_path_buf(),
            overwritten: existed,
        })
        .with_badge(StatusBadge::success("Config initialized")),
    )
}
