//! Wire structs for the slice of the base gateway's chat schema this core
//! reads: the assistant message of a full response and the streaming delta.
//!
//! Unknown fields are tolerated and optional fields default, so an evolving
//! backend response never fails deserialization here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::reasoning::ReasoningSource;

/// Assistant message as it appears in a chat-completions response choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<Vec<Value>>,
}

/// Incremental chunk of a streaming response choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_details: Option<Vec<Value>>,
}

impl ReasoningSource for ChatMessage {
    fn reasoning_details(&self) -> Option<&[Value]> {
        self.reasoning_details.as_deref()
    }
}

impl ReasoningSource for ChatDelta {
    fn reasoning_details(&self) -> Option<&[Value]> {
        self.reasoning_details.as_deref()
    }
}
