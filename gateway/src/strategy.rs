//! The vendor seam the base gateway delegates reasoning work to.
//!
//! The base chat gateway is vendor-neutral: it builds request bodies, sends
//! them, and assembles responses. Everything reasoning-specific - how a
//! vendor encodes chain-of-thought, which request flags it needs, how prior
//! thinking is replayed - lives behind [`ReasoningStrategy`]. The gateway
//! holds one `&'static dyn ReasoningStrategy` (see [`crate::registry`]) and
//! calls through it on both the message-construction and response-parsing
//! paths.

use serde_json::{Map, Value};

use relay_types::{ReasoningBundle, ReasoningSource};

/// Connection settings a transport layer starts from when the caller's
/// configuration supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionDefaults {
    pub base_url: &'static str,
    /// Placeholder only; real keys come from configuration.
    pub api_key: &'static str,
}

/// Per-vendor reasoning behavior.
///
/// Every method is a total function: malformed or missing input degrades to
/// empty output, never to an error. The default bodies are the behavior of a
/// plain OpenAI-compatible backend with no vendor reasoning encoding;
/// vendors override only what they change.
pub trait ReasoningStrategy: std::fmt::Debug + Send + Sync {
    /// Vendor name used for registry lookup and logging.
    fn name(&self) -> &'static str;

    /// Default endpoint and API-key placeholder for this vendor.
    fn connection_defaults(&self) -> ConnectionDefaults;

    /// Extra body parameters merged into every outbound request.
    fn extra_body(&self) -> Map<String, Value> {
        Map::new()
    }

    /// Flattened thinking text carried by a full response message.
    ///
    /// Always returns a string; empty means "no reasoning in this turn".
    fn extract_thinking(&self, _message: &dyn ReasoningSource) -> String {
        String::new()
    }

    /// Structured reasoning carried by a full response message.
    fn extract_reasoning(&self, _message: &dyn ReasoningSource) -> ReasoningBundle {
        ReasoningBundle::default()
    }

    /// Thinking increment carried by one streaming delta chunk.
    ///
    /// Stateless; the caller accumulates successive results (see
    /// [`crate::stream::StreamAccumulator`]).
    fn extract_thinking_delta(&self, _delta: &dyn ReasoningSource) -> String {
        String::new()
    }

    /// Structured reasoning increment carried by one streaming delta chunk.
    fn extract_reasoning_delta(&self, _delta: &dyn ReasoningSource) -> ReasoningBundle {
        ReasoningBundle::default()
    }

    /// Vendor-shaped request fragment that replays prior thinking into the
    /// next turn's assistant message. `None` means the vendor has no replay
    /// encoding and the message is sent as-is.
    fn replay_fragment(&self, _thinking: &str) -> Option<Map<String, Value>> {
        None
    }

    /// Fixed model catalog for vendors whose backend exposes no listing
    /// endpoint. Index 0 is the primary/default model. Empty means "ask the
    /// backend".
    fn list_models(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Strategy for OpenAI-compatible backends with no vendor reasoning
/// encoding. All hook defaults apply unchanged.
#[derive(Debug)]
pub struct Passthrough;

impl ReasoningStrategy for Passthrough {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn connection_defaults(&self) -> ConnectionDefaults {
        ConnectionDefaults {
            base_url: "https://api.openai.com/v1",
            api_key: "",
        }
    }
}

/// Merge a strategy's replay fragment into the assistant message being
/// replayed, leaving the message's other fields untouched.
///
/// Skipping this merge on replay breaks the model's reasoning chain across
/// turns; it is the failure mode interleaved-thinking support exists to
/// prevent.
pub fn apply_replay(strategy: &dyn ReasoningStrategy, message: &mut Value, thinking: &str) {
    let Some(fragment) = strategy.replay_fragment(thinking) else {
        return;
    };
    let Some(target) = message.as_object_mut() else {
        tracing::debug!(
            strategy = strategy.name(),
            "replay target is not an object; dropping reasoning fragment"
        );
        return;
    };
    for (key, value) in fragment {
        target.insert(key, value);
    }
}
