use std::ops::Range;

use super::message::Message;

/// A message that matched a search query, with a display snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    pub message: &'a Message,
    pub snippet: String,
    /// Char range of the match inside `snippet`, if it could be located
    pub highlight: Option<Range<usize>>,
}

impl SearchResult<'_> {
    /// Char offset of the match start in the snippet, or -1 when unknown
    pub fn match_start(&self) -> i64 {
        self.highlight.as_ref().map_or(-1, |r| r.start as i64)
    }

    /// Char offset one past the match end in the snippet, or -1 when unknown
    pub fn match_end(&self) -> i64 {
        self.highlight.as_ref().map_or(-1, |r| r.end as i64)
    }
}
