use std::borrow::Cow;

use crate::models::{EventPayload, Message, MessageKind};

/// Extract the searchable plain text of a message
///
/// - User and assistant messages return their text unchanged
/// - Tool calls return `"<tool name> <description>"`, dropping empty parts
/// - Events return their display message only for [`EventPayload::Message`]
/// - Everything else returns an empty string
///
/// # Examples
///
/// ```
/// use chat_message_search::models::{Message, MessageKind};
/// use chat_message_search::search::extract_text;
/// use chrono::Utc;
///
/// let message = Message::new(
///     "m1",
///     Utc::now(),
///     MessageKind::ToolCall { tool_name: Some("Read".to_string()), description: None },
/// );
/// assert_eq!(extract_text(&message), "Read");
/// ```
pub fn extract_text(message: &Message) -> Cow<'_, str> {
    match &message.kind {
        MessageKind::User { text } | MessageKind::Assistant { text } => Cow::Borrowed(text),
        MessageKind::ToolCall { tool_name, description } => {
            let parts: Vec<&str> = [tool_name.as_deref(), description.as_deref()]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect();
            match parts.as_slice() {
                [] => Cow::Borrowed(""),
                [single] => Cow::Borrowed(*single),
                _ => Cow::Owned(parts.join(" ")),
            }
        }
        MessageKind::Event { event: EventPayload::Message { message: Some(display) } } => {
            Cow::Borrowed(display)
        }
        MessageKind::Event { .. } | MessageKind::Unknown => Cow::Borrowed(""),
    }
}
