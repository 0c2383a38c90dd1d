//! JSONL parser for conversation transcripts
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: Malformed JSON lines are logged to stderr and skipped,
//!   so a single bad line doesn't make a whole conversation unsearchable.
//!
//! - **Unknown kinds are not failures**: A well-formed message with an unrecognized
//!   `type` deserializes as [`crate::models::MessageKind::Unknown`] and is kept.
//!
//! - **Catastrophic failure detection**: If >50% of lines fail to parse, or if 100
//!   consecutive errors occur, the parser returns an error.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context; callers report the
//!   error rather than matching on its type.

pub mod deserializers;
pub mod messages;

pub use messages::{parse_message_file, parse_messages};
