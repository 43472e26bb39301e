//! MiniMax reasoning strategy.
//!
//! MiniMax encodes chain-of-thought as a `reasoning_details` array on both
//! response messages and streaming deltas, activated by the `reasoning_split`
//! request flag. For multi-turn interleaved thinking the full prior thinking
//! must be replayed into the next request inside the assistant message's
//! `reasoning_details`, or the model's reasoning chain is truncated.

use serde_json::{Map, Value, json};

use crate::strategy::{ConnectionDefaults, ReasoningStrategy};
use relay_types::{ReasoningBundle, ReasoningSource};

/// MiniMax official API endpoint.
pub const MINIMAX_BASE_URL: &str = "https://api.minimaxi.com/v1";

/// Fixed catalog, newest preference first. The MiniMax API exposes no model
/// listing endpoint, so this order is part of the contract: callers rely on
/// index 0 being the default model.
pub const MINIMAX_MODELS: &[&str] = &[
    "MiniMax-M2",
    "MiniMax-M2-Stable",
    "MiniMax-M2.1",
    "MiniMax-M2.1-Lighting",
    "MiniMax-M2.5",
    "MiniMax-M2.5-Lightning",
];

#[derive(Debug)]
pub struct Minimax;

impl Minimax {
    /// Shared normalization for both the full-message and delta paths.
    fn bundle(source: &dyn ReasoningSource) -> Option<ReasoningBundle> {
        let bundle = ReasoningBundle::from_source(source)?;
        if let Some(raw) = source.reasoning_details() {
            let skipped = raw.len().saturating_sub(bundle.len());
            if skipped > 0 {
                tracing::trace!(skipped, "skipped unrecognizable reasoning details");
            }
        }
        Some(bundle)
    }

    fn thinking(source: &dyn ReasoningSource) -> String {
        Self::bundle(source)
            .map(|bundle| bundle.thinking_text())
            .unwrap_or_default()
    }

    fn reasoning(source: &dyn ReasoningSource) -> ReasoningBundle {
        Self::bundle(source).unwrap_or_default()
    }
}

impl ReasoningStrategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn connection_defaults(&self) -> ConnectionDefaults {
        ConnectionDefaults {
            base_url: MINIMAX_BASE_URL,
            api_key: "",
        }
    }

    /// `reasoning_split` makes the backend return reasoning in a separate
    /// structured field instead of inlined with the answer text.
    fn extra_body(&self) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert("reasoning_split".to_string(), Value::Bool(true));
        body
    }

    fn extract_thinking(&self, message: &dyn ReasoningSource) -> String {
        Self::thinking(message)
    }

    fn extract_reasoning(&self, message: &dyn ReasoningSource) -> ReasoningBundle {
        Self::reasoning(message)
    }

    fn extract_thinking_delta(&self, delta: &dyn ReasoningSource) -> String {
        Self::thinking(delta)
    }

    fn extract_reasoning_delta(&self, delta: &dyn ReasoningSource) -> ReasoningBundle {
        Self::reasoning(delta)
    }

    /// Always emits exactly one detail holding the full thinking text, even
    /// when the originally decoded bundle had several. Single-detail round
    /// trips are exact; multi-detail structure collapses on replay.
    fn replay_fragment(&self, thinking: &str) -> Option<Map<String, Value>> {
        let mut fragment = Map::new();
        fragment.insert(
            "reasoning_details".to_string(),
            json!([{ "text": thinking }]),
        );
        Some(fragment)
    }

    fn list_models(&self) -> &'static [&'static str] {
        MINIMAX_MODELS
    }
}

#[cfg(test)]
mod tests {
    use super::{MINIMAX_BASE_URL, MINIMAX_MODELS, Minimax};
    use crate::strategy::{ReasoningStrategy, apply_replay};
    use relay_types::{ChatDelta, ChatMessage};
    use serde_json::{Value, json};

    fn message_with_details(details: Value) -> ChatMessage {
        serde_json::from_value(json!({
            "role": "assistant",
            "content": "answer",
            "reasoning_details": details
        }))
        .unwrap()
    }

    #[test]
    fn missing_details_extract_to_empty() {
        let message = ChatMessage::default();
        assert_eq!(Minimax.extract_thinking(&message), "");
        assert!(Minimax.extract_reasoning(&message).is_empty());
    }

    #[test]
    fn details_concatenate_in_order() {
        let message = message_with_details(json!([{"text": "a"}, {"text": "b"}]));
        assert_eq!(Minimax.extract_thinking(&message), "ab");
        let bundle = Minimax.extract_reasoning(&message);
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.to_wire(), vec![json!({"text": "a"}), json!({"text": "b"})]);
    }

    #[test]
    fn detail_without_text_contributes_nothing_but_stays_in_bundle() {
        let message = message_with_details(json!([{"text": "a"}, {}, {"text": "b"}]));
        assert_eq!(Minimax.extract_thinking(&message), "ab");
        assert_eq!(Minimax.extract_reasoning(&message).len(), 3);
    }

    #[test]
    fn empty_details_array_behaves_like_absence() {
        let message = message_with_details(json!([]));
        assert_eq!(Minimax.extract_thinking(&message), "");
        assert!(Minimax.extract_reasoning(&message).is_empty());
    }

    #[test]
    fn replay_fragment_holds_exactly_one_detail() {
        let fragment = Minimax.replay_fragment("hello").unwrap();
        assert_eq!(
            Value::Object(fragment),
            json!({"reasoning_details": [{"text": "hello"}]})
        );
    }

    #[test]
    fn replay_fragment_accepts_empty_thinking() {
        let fragment = Minimax.replay_fragment("").unwrap();
        assert_eq!(
            Value::Object(fragment),
            json!({"reasoning_details": [{"text": ""}]})
        );
    }

    #[test]
    fn single_detail_round_trip_is_exact() {
        let thinking = "First consider the units.\nThen convert.";
        let mut replayed = json!({"role": "assistant", "content": "42"});
        apply_replay(&Minimax, &mut replayed, thinking);
        assert_eq!(Minimax.extract_thinking(&replayed), thinking);
    }

    #[test]
    fn multi_detail_bundles_collapse_on_replay() {
        let message = message_with_details(json!([{"text": "a"}, {"text": "b"}]));
        let thinking = Minimax.extract_thinking(&message);

        let mut replayed = json!({"role": "assistant", "content": "answer"});
        apply_replay(&Minimax, &mut replayed, &thinking);

        // Text survives; the two-detail structure does not.
        assert_eq!(Minimax.extract_thinking(&replayed), "ab");
        assert_eq!(Minimax.extract_reasoning(&replayed).len(), 1);
    }

    #[test]
    fn apply_replay_preserves_other_message_fields() {
        let mut replayed = json!({"role": "assistant", "content": "answer"});
        apply_replay(&Minimax, &mut replayed, "thinking");
        assert_eq!(replayed["role"], "assistant");
        assert_eq!(replayed["content"], "answer");
        assert_eq!(replayed["reasoning_details"], json!([{"text": "thinking"}]));
    }

    #[test]
    fn extra_body_is_exactly_the_split_flag() {
        let body = Minimax.extra_body();
        assert_eq!(body.len(), 1);
        assert_eq!(body.get("reasoning_split"), Some(&Value::Bool(true)));
    }

    #[test]
    fn catalog_is_nonempty_with_primary_model_first() {
        let models = Minimax.list_models();
        assert!(!models.is_empty());
        assert_eq!(models[0], "MiniMax-M2");
        assert_eq!(models, MINIMAX_MODELS);
    }

    #[test]
    fn connection_defaults_point_at_the_official_endpoint() {
        let defaults = Minimax.connection_defaults();
        assert_eq!(defaults.base_url, MINIMAX_BASE_URL);
        assert_eq!(defaults.api_key, "");
    }

    #[test]
    fn delta_extraction_mirrors_message_extraction() {
        let delta: ChatDelta = serde_json::from_value(json!({
            "reasoning_details": [{"text": "He"}]
        }))
        .unwrap();
        assert_eq!(Minimax.extract_thinking_delta(&delta), "He");
        assert_eq!(Minimax.extract_reasoning_delta(&delta).len(), 1);
    }

    #[test]
    fn caller_accumulation_across_delta_chunks() {
        let chunks: Vec<ChatDelta> = vec![
            serde_json::from_value(json!({"reasoning_details": [{"text": "He"}]})).unwrap(),
            serde_json::from_value(json!({"reasoning_details": [{"text": "llo"}]})).unwrap(),
        ];
        let mut thinking = String::new();
        for chunk in &chunks {
            thinking.push_str(&Minimax.extract_thinking_delta(chunk));
        }
        assert_eq!(thinking, "Hello");
    }
}
