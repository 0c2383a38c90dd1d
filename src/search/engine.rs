use super::extract::extract_text;
use super::matching::contains_ignore_case;
use super::snippet::{DEFAULT_MAX_LENGTH, build_snippet};
use crate::models::{Message, SearchResult};

/// Tunables for a search pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Target snippet length in chars, excluding ellipses
    pub max_snippet_length: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_snippet_length: DEFAULT_MAX_LENGTH }
    }
}

/// Search messages for a case-insensitive substring using default options
///
/// See [`search_with`].
pub fn search<'a, I>(messages: I, query: &str) -> Vec<SearchResult<'a>>
where
    I: IntoIterator<Item = &'a Message>,
{
    search_with(messages, query, &SearchOptions::default())
}

/// Search messages for a case-insensitive substring
///
/// Returns one result per matching message, in input order. A query that is empty
/// after trimming returns no results without scanning. Messages with no searchable
/// text (see [`extract_text`]) never match.
///
/// The query itself is not trimmed for matching, so `"fox "` only matches text
/// containing a space after "fox".
///
/// # Examples
///
/// ```
/// use chat_message_search::models::{Message, MessageKind};
/// use chat_message_search::search::search;
/// use chrono::Utc;
///
/// let messages = vec![
///     Message::new("m1", Utc::now(), MessageKind::User { text: "Where is the fox?".to_string() }),
///     Message::new("m2", Utc::now(), MessageKind::Assistant { text: "No idea".to_string() }),
/// ];
/// let results = search(&messages, "FOX");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].message.id, "m1");
/// ```
pub fn search_with<'a, I>(messages: I, query: &str, options: &SearchOptions) -> Vec<SearchResult<'a>>
where
    I: IntoIterator<Item = &'a Message>,
{
    if query.trim().is_empty() {
        return Vec::new();
    }

    messages
        .into_iter()
        .filter_map(|message| {
            let text = extract_text(message);
            if text.is_empty() || !contains_ignore_case(&text, query) {
                return None;
            }

            let snippet = build_snippet(&text, query, options.max_snippet_length);
            Some(SearchResult { message, snippet: snippet.text, highlight: snippet.highlight })
        })
        .collect()
}

/// Index of the message with the given id, used to jump from a result to the conversation
pub fn position_of(messages: &[Message], id: &str) -> Option<usize> {
    messages.iter().position(|message| message.id == id)
}
