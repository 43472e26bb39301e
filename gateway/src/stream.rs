//! Cross-delta accumulation for streamed responses.
//!
//! Extraction itself is stateless and per-chunk; assembling the full answer,
//! thinking text, and structured reasoning across a stream is the caller's
//! job. [`StreamAccumulator`] does that assembly for the gateway's
//! response-parsing path.

use relay_types::{ChatDelta, ChatMessage, ReasoningBundle};

use crate::strategy::ReasoningStrategy;

/// Accumulates streamed delta chunks into the final response parts.
///
/// Feed every received chunk through [`StreamAccumulator::push`] in arrival
/// order; empty chunks contribute nothing.
#[derive(Debug, Default)]
pub struct StreamAccumulator {
    content: String,
    thinking: String,
    reasoning: ReasoningBundle,
}

impl StreamAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, strategy: &dyn ReasoningStrategy, delta: &ChatDelta) {
        if let Some(content) = &delta.content {
            self.content.push_str(content);
        }
        self.thinking.push_str(&strategy.extract_thinking_delta(delta));
        self.reasoning.extend(strategy.extract_reasoning_delta(delta));
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn thinking(&self) -> &str {
        &self.thinking
    }

    #[must_use]
    pub fn reasoning(&self) -> &ReasoningBundle {
        &self.reasoning
    }

    /// Assemble the accumulated parts into the final assistant message.
    ///
    /// The structured reasoning is carried along so the complete message can
    /// be kept in history and replayed next turn.
    #[must_use]
    pub fn into_message(self) -> ChatMessage {
        let reasoning_details = if self.reasoning.is_empty() {
            None
        } else {
            Some(self.reasoning.to_wire())
        };
        ChatMessage {
            role: Some("assistant".to_string()),
            content: Some(self.content),
            reasoning_details,
        }
    }
}
