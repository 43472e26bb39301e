//! Vendor reasoning encoding, canonicalized at the wire boundary.
//!
//! MiniMax returns chain-of-thought as a `reasoning_details` array whose
//! elements are loosely shaped: usually `{"text": "..."}`, sometimes carrying
//! vendor extras, occasionally something else entirely. Everything is
//! converted to [`ReasoningDetail`] immediately so the rest of the codec
//! operates on one concrete shape only.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unit of vendor-encoded reasoning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReasoningDetail {
    /// A detail carrying a `text` payload, plus any vendor extras.
    Text {
        text: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// A mapping-shaped detail without a string `text` payload.
    ///
    /// Kept verbatim so the structured bundle stays lossless; contributes
    /// nothing to flattened thinking text.
    Opaque(Map<String, Value>),
}

impl ReasoningDetail {
    /// Canonicalize one raw wire element.
    ///
    /// Objects with a string `text` field become [`ReasoningDetail::Text`];
    /// other objects pass through as [`ReasoningDetail::Opaque`]; anything
    /// that is not an object is not a detail.
    #[must_use]
    pub fn from_wire(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        match map.get("text") {
            Some(Value::String(text)) => {
                let extra = map
                    .iter()
                    .filter(|(key, _)| key.as_str() != "text")
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                Some(Self::Text {
                    text: text.clone(),
                    extra,
                })
            }
            _ => Some(Self::Opaque(map.clone())),
        }
    }

    /// Build a detail holding exactly the given text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            extra: Map::new(),
        }
    }

    /// The `text` payload, if this detail carries one.
    #[must_use]
    pub fn text_payload(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Opaque(_) => None,
        }
    }

    /// Re-encode into the vendor wire shape.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Text { text, extra } => {
                let mut map = Map::new();
                map.insert("text".to_string(), Value::String(text.clone()));
                for (key, value) in extra {
                    map.insert(key.clone(), value.clone());
                }
                Value::Object(map)
            }
            Self::Opaque(map) => Value::Object(map.clone()),
        }
    }
}

/// Anything that may carry a vendor `reasoning_details` array.
///
/// Full response messages and streaming deltas both implement this, so the
/// non-streaming and delta extraction paths share one normalization routine.
pub trait ReasoningSource {
    /// The raw wire elements, if the source carries any.
    fn reasoning_details(&self) -> Option<&[Value]>;
}

impl ReasoningSource for Value {
    fn reasoning_details(&self) -> Option<&[Value]> {
        self.get("reasoning_details")?.as_array().map(Vec::as_slice)
    }
}

/// Ordered sequence of [`ReasoningDetail`].
///
/// Concatenation order reconstructs the chain-of-thought in emission order.
/// Details are never deduplicated; an empty bundle is treated everywhere as
/// equivalent to no bundle at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReasoningBundle(Vec<ReasoningDetail>);

impl ReasoningBundle {
    #[must_use]
    pub fn new(details: Vec<ReasoningDetail>) -> Self {
        Self(details)
    }

    /// Normalize a source's `reasoning_details` into a bundle.
    ///
    /// Returns `None` when the attribute is missing or empty, or when no
    /// element survives canonicalization. Unrecognizable elements are
    /// silently skipped rather than failing the whole bundle.
    #[must_use]
    pub fn from_source<S: ReasoningSource + ?Sized>(source: &S) -> Option<Self> {
        let raw = source.reasoning_details()?;
        let details: Vec<ReasoningDetail> =
            raw.iter().filter_map(ReasoningDetail::from_wire).collect();
        if details.is_empty() {
            None
        } else {
            Some(Self(details))
        }
    }

    #[must_use]
    pub fn details(&self) -> &[ReasoningDetail] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, detail: ReasoningDetail) {
        self.0.push(detail);
    }

    /// Append another bundle's details, preserving arrival order.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Flatten to plain thinking text: each detail's `text` concatenated with
    /// no separator, skipping empty or absent payloads.
    #[must_use]
    pub fn thinking_text(&self) -> String {
        let mut thinking = String::new();
        for detail in &self.0 {
            if let Some(text) = detail.text_payload() {
                thinking.push_str(text);
            }
        }
        thinking
    }

    /// Re-encode every detail into the vendor wire shape.
    #[must_use]
    pub fn to_wire(&self) -> Vec<Value> {
        self.0.iter().map(ReasoningDetail::to_wire).collect()
    }
}

impl<'a> IntoIterator for &'a ReasoningBundle {
    type Item = &'a ReasoningDetail;
    type IntoIter = std::slice::Iter<'a, ReasoningDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
