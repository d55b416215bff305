use crate::defaults::SessionDefaults;
use parley_types::{Chat, Message};
use uuid::Uuid;

/// Placeholder title for chats created without one
pub const DEFAULT_CHAT_TITLE: &str = "New Chat";

/// Build a new chat seeded from a defaults snapshot.
///
/// - Empty or missing `title` falls back to [`DEFAULT_CHAT_TITLE`]
/// - A non-empty system message becomes the only message; otherwise the
///   chat starts empty
/// - The chat owns a copy of the default config
/// - `title_set` starts false and `folder` is attached as given
pub fn generate_default_chat(
    title: Option<&str>,
    folder: Option<&str>,
    defaults: &SessionDefaults,
) -> Chat {
    let title = title
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_CHAT_TITLE)
        .to_string();

    let messages = if defaults.system_message.is_empty() {
        Vec::new()
    } else {
        vec![Message::system(defaults.system_message.clone())]
    };

    let chat = Chat {
        id: Uuid::new_v4(),
        title,
        messages,
        config: defaults.chat_config.clone(),
        title_set: false,
        folder: folder.map(str::to_string),
    };

    tracing::debug!(
        chat_id = %chat.id,
        model = %chat.config.model,
        seeded = !chat.messages.is_empty(),
        "created default chat"
    );

    chat
}
