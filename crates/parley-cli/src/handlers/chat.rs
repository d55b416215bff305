use crate::handlers::HandlerContext;
use crate::presentation::view_models::ChatViewModel;
use crate::presentation::{CommandResultViewModel, StatusBadge};
use crate::types::OutputFormat;
use anyhow::Result;
use parley_runtime::{Config, DefaultsStore};
use std::path::Path;

pub fn new_chat(
    config_path: &Path,
    title: Option<&str>,
    folder: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let defaults = Config::load_from(config_path)?.session_defaults()?;
    let store = DefaultsStore::global();
    store.replace(defaults);

    let chat = store.generate_default_chat(title, folder);
    let badge = StatusBadge::success(format!("Created '{}'", chat.title));

    ctx.render(CommandResultViewModel::new(ChatViewModel { chat }).with_badge(badge))
}
