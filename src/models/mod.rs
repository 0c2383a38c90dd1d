//! Data models for chat conversations and search results.
//!
//! - [`Message`] - One message in a conversation, tagged by [`MessageKind`]
//! - [`EventPayload`] - Structured payload of system event messages
//! - [`SearchResult`] - A matched message with its snippet and highlight range
//!
//! Messages deserialize from the JSONL transcript format using custom deserializers
//! for timestamps and ids in [`crate::parsers::deserializers`].

pub mod message;
pub mod search;

pub use message::{EventPayload, Message, MessageKind};
pub use search::SearchResult;
