//! Case-insensitive search over an in-memory conversation.
//!
//! A search pass extracts the searchable text of each message ([`extract_text`]),
//! keeps messages whose text contains the query ignoring case ([`search`]), and
//! builds a bounded excerpt around the first match ([`build_snippet`]).
//!
//! Every function here is pure and total: unknown message or event kinds simply
//! contribute no text, and "no match" is an empty result rather than an error.

pub mod engine;
pub mod extract;
pub mod matching;
pub mod snippet;

pub use engine::{SearchOptions, position_of, search, search_with};
pub use extract::extract_text;
pub use matching::{contains_ignore_case, find_ignore_case};
pub use snippet::{DEFAULT_MAX_LENGTH, Snippet, build_snippet};
