//! Name-based strategy selection.
//!
//! The base gateway picks its reasoning strategy from configuration at
//! startup; strategies are stateless statics, so lookup hands out
//! `&'static dyn` references with no allocation.

use thiserror::Error;

use crate::minimax::Minimax;
use crate::strategy::{Passthrough, ReasoningStrategy};

const KNOWN_PROVIDERS: &[&str] = &["minimax", "openai"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider '{raw}'; expected one of: {KNOWN_PROVIDERS:?}")]
pub struct UnknownProviderError {
    raw: String,
}

impl UnknownProviderError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

static MINIMAX: Minimax = Minimax;
static PASSTHROUGH: Passthrough = Passthrough;

/// Look up the strategy for a configured provider name.
pub fn strategy_for(name: &str) -> Result<&'static dyn ReasoningStrategy, UnknownProviderError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "minimax" => Ok(&MINIMAX),
        "openai" => Ok(&PASSTHROUGH),
        other => Err(UnknownProviderError {
            raw: other.to_string(),
        }),
    }
}

/// Strategy used when configuration names no provider.
#[must_use]
pub fn default_strategy() -> &'static dyn ReasoningStrategy {
    &PASSTHROUGH
}

#[cfg(test)]
mod tests {
    use super::{default_strategy, strategy_for};

    #[test]
    fn resolves_known_providers() {
        assert_eq!(strategy_for("minimax").unwrap().name(), "minimax");
        assert_eq!(strategy_for("openai").unwrap().name(), "openai");
    }

    #[test]
    fn lookup_is_case_and_whitespace_insensitive() {
        assert_eq!(strategy_for("  MiniMax ").unwrap().name(), "minimax");
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let err = strategy_for("anthropic").unwrap_err();
        assert_eq!(err.raw(), "anthropic");
        assert!(err.to_string().contains("minimax"));
    }

    #[test]
    fn default_is_the_passthrough_strategy() {
        assert_eq!(default_strategy().name(), "openai");
    }
}
