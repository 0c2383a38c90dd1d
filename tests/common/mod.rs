//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for conversation transcript files in a temp directory
pub struct ConversationFileBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl ConversationFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Add a message line
    pub fn with_message(mut self, message: MessageBuilder) -> Self {
        self.lines.push(message.to_json());
        self
    }

    /// Add a raw line, e.g. malformed JSON or blank lines
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the transcript and return the temp dir together with the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("conversation.jsonl");
        fs::write(&path, self.lines.join("\n")).expect("Failed to write conversation file");
        (self.temp_dir, path)
    }
}

impl Default for ConversationFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one message line in a transcript
pub struct MessageBuilder {
    id: String,
    created_at: i64,
    body: Value,
}

impl MessageBuilder {
    pub fn user(id: &str, text: &str) -> Self {
        Self::with_body(id, json!({"type": "user", "text": text}))
    }

    pub fn assistant(id: &str, text: &str) -> Self {
        Self::with_body(id, json!({"type": "assistant", "text": text}))
    }

    pub fn tool_call(id: &str, tool_name: &str, description: &str) -> Self {
        Self::with_body(
            id,
            json!({"type": "tool_call", "toolName": tool_name, "description": description}),
        )
    }

    pub fn event_message(id: &str, message: &str) -> Self {
        Self::with_body(id, json!({"type": "event", "event": {"type": "message", "message": message}}))
    }

    pub fn event(id: &str, event_type: &str) -> Self {
        Self::with_body(id, json!({"type": "event", "event": {"type": event_type}}))
    }

    /// A message kind the crate doesn't know about
    pub fn other(id: &str, kind: &str) -> Self {
        Self::with_body(id, json!({"type": kind, "text": "ignored"}))
    }

    fn with_body(id: &str, body: Value) -> Self {
        Self { id: id.to_string(), created_at: 1_700_000_000_000, body }
    }

    /// Set the creation time in milliseconds since epoch
    pub fn created_at(mut self, ms: i64) -> Self {
        self.created_at = ms;
        self
    }

    pub fn to_json(&self) -> String {
        let mut value = self.body.clone();
        value["id"] = json!(self.id);
        value["createdAt"] = json!(self.created_at);
        value.to_string()
    }
}

/// A small conversation touching every message kind
pub fn sample_conversation() -> (TempDir, PathBuf) {
    ConversationFileBuilder::new()
        .with_message(
            MessageBuilder::user("m1", "the quick brown fox jumps over the lazy dog")
                .created_at(1_704_067_200_000), // 2024-01-01
        )
        .with_message(
            MessageBuilder::assistant("m2", "Foxes are small omnivores").created_at(1_718_452_800_000), // 2024-06-15
        )
        .with_message(MessageBuilder::tool_call("m3", "Read", "").created_at(1_718_452_900_000))
        .with_message(
            MessageBuilder::event_message("m4", "Conversation about the fox was compacted")
                .created_at(1_718_453_000_000),
        )
        .with_message(MessageBuilder::event("m5", "token_usage").created_at(1_718_453_100_000))
        .with_message(MessageBuilder::other("m6", "code_viewer").created_at(1_718_453_200_000))
        .build()
}
