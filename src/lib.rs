//! Chat Message Search - Find messages in a chat conversation
//!
//! This library provides the search core behind a chat client's "search messages"
//! view. It supports:
//!
//! - Extracting searchable text from each kind of message
//! - Case-insensitive substring search that keeps conversation order
//! - Bounded snippets with the match position marked
//! - Loading conversations from JSONL transcripts and filtering them by kind or date
//!
//! # Example
//!
//! ```no_run
//! use chat_message_search::{parse_message_file, search};
//! use std::path::Path;
//!
//! let messages = parse_message_file(Path::new("conversation.jsonl"))?;
//! for result in search(&messages, "deploy") {
//!     println!("{}: {}", result.message.id, result.snippet);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use models::{EventPayload, Message, MessageKind, SearchResult};
pub use parsers::parse_message_file;
pub use search::{SearchOptions, build_snippet, extract_text, search, search_with};
