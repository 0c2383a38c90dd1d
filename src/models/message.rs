use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message as stored in a conversation transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_message_id")]
    pub id: String,
    #[serde(
        rename = "createdAt",
        deserialize_with = "crate::parsers::deserializers::deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: MessageKind,
}

impl Message {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>, kind: MessageKind) -> Self {
        Self { id: id.into(), created_at, kind }
    }
}

/// Message payload, discriminated by the `type` field on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageKind {
    User {
        text: String,
    },
    Assistant {
        text: String,
    },
    ToolCall {
        #[serde(rename = "toolName", default)]
        tool_name: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    Event {
        event: EventPayload,
    },
    /// Any kind this crate does not know about yet
    #[serde(other)]
    Unknown,
}

impl MessageKind {
    /// Short label used by filters and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            MessageKind::User { .. } => "user",
            MessageKind::Assistant { .. } => "assistant",
            MessageKind::ToolCall { .. } => "tool",
            MessageKind::Event { .. } => "event",
            MessageKind::Unknown => "unknown",
        }
    }
}

/// Structured payload of a system event message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// Event carrying a display string for the user
    Message {
        #[serde(default)]
        message: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_message() {
        let json = r#"{"id":"m1","createdAt":1762076480016,"type":"user","text":"hello"}"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.id, "m1");
        assert_eq!(message.kind, MessageKind::User { text: "hello".to_string() });
        assert_eq!(message.created_at, DateTime::from_timestamp_millis(1762076480016).unwrap());
    }

    #[test]
    fn test_deserialize_tool_call_without_description() {
        let json = r#"{"id":"m2","createdAt":1000,"type":"tool_call","toolName":"Read"}"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(
            message.kind,
            MessageKind::ToolCall { tool_name: Some("Read".to_string()), description: None }
        );
    }

    #[test]
    fn test_deserialize_event_message() {
        let json = r#"{"id":"m3","createdAt":"2025-11-02T09:41:20Z","type":"event","event":{"type":"message","message":"Context compacted"}}"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(
            message.kind,
            MessageKind::Event {
                event: EventPayload::Message { message: Some("Context compacted".to_string()) }
            }
        );
    }

    #[test]
    fn test_deserialize_unknown_event_type() {
        let json = r#"{"id":"m4","createdAt":1000,"type":"event","event":{"type":"model_changed","model":"x"}}"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.kind, MessageKind::Event { event: EventPayload::Unknown });
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        let json = r#"{"id":"m5","createdAt":1000,"type":"code_viewer","language":"rust"}"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.kind, MessageKind::Unknown);
        assert_eq!(message.kind.label(), "unknown");
    }

    #[test]
    fn test_deserialize_rejects_empty_id() {
        let json = r#"{"id":"","createdAt":1000,"type":"user","text":"hello"}"#;
        let result = serde_json::from_str::<Message>(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(MessageKind::User { text: String::new() }.label(), "user");
        assert_eq!(MessageKind::Assistant { text: String::new() }.label(), "assistant");
        assert_eq!(MessageKind::ToolCall { tool_name: None, description: None }.label(), "tool");
        assert_eq!(MessageKind::Event { event: EventPayload::Unknown }.label(), "event");
    }
}
