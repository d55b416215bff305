pub mod config;
pub mod defaults;
pub mod error;
pub mod factory;

pub use config::{ChatConfigSection, Config, DefaultsSection, resolve_workspace_path};
pub use defaults::{BUILTIN_SYSTEM_MESSAGE, DefaultsStore, SYSTEM_MESSAGE_ENV, SessionDefaults};
pub use error::{Error, Result};
pub use factory::{DEFAULT_CHAT_TITLE, generate_default_chat};
