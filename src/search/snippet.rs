//! Bounded-length excerpts around a search match.
//!
//! Lengths and offsets are measured in chars, never bytes, so multi-byte text
//! can't be split inside a code point.

use std::ops::Range;

use super::matching::{find_folded, fold, fold_char};

/// Snippet length used when the caller doesn't pick one
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// How far around the left edge we look for a space to break on
const WORD_BOUNDARY_WINDOW: usize = 10;

const ELLIPSIS: &str = "...";

/// Excerpt of a message's text with the match position marked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    /// Char range of the query inside `text`
    pub highlight: Option<Range<usize>>,
}

/// Build a snippet of at most roughly `max_length` chars around the first match of `query`
///
/// The window is centered on the match. When it doesn't start at the beginning of
/// the text, the left edge is moved to just after the last space within ten chars
/// of it so the snippet doesn't open mid-word; the right edge is never adjusted.
/// Truncated sides get `...`. With a small `max_length` that move can skip over the
/// match, leaving the snippet without a highlight.
///
/// Without a match the text is truncated to `max_length` chars and no highlight is set.
/// The highlight is located again in the finished snippet, so it accounts for the
/// leading ellipsis.
///
/// # Examples
///
/// ```
/// use chat_message_search::search::build_snippet;
///
/// let snippet = build_snippet("the quick brown fox jumps over the lazy dog", "fox", 100);
/// assert_eq!(snippet.text, "the quick brown fox jumps over the lazy dog");
/// assert_eq!(snippet.highlight, Some(16..19));
/// ```
pub fn build_snippet(text: &str, query: &str, max_length: usize) -> Snippet {
    let chars: Vec<char> = text.chars().collect();
    let folded_text: Vec<char> = chars.iter().copied().map(fold_char).collect();
    let folded_query = fold(query);

    let Some(match_index) = find_folded(&folded_text, &folded_query) else {
        return Snippet { text: chars.iter().take(max_length).collect(), highlight: None };
    };

    let query_len = folded_query.len();
    let context = max_length.saturating_sub(query_len) / 2;
    let mut start = match_index.saturating_sub(context);
    let end = (match_index + query_len + context).min(chars.len());

    if start > 0 {
        let search_from = (start + WORD_BOUNDARY_WINDOW).min(chars.len() - 1);
        if let Some(space) = chars[..=search_from].iter().rposition(|&c| c == ' ')
            && space + WORD_BOUNDARY_WINDOW > start
        {
            // May land past the match, in which case no highlight is found below
            start = (space + 1).min(end);
        }
    }

    let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push_str(ELLIPSIS);
    }

    let highlight = find_folded(&fold(&snippet), &folded_query).map(|i| i..i + query_len);

    Snippet { text: snippet, highlight }
}
