//! Vendor reasoning strategies for the Relay chat gateway.
//!
//! # Architecture
//!
//! The base gateway speaks a generic OpenAI-compatible chat schema; vendors
//! differ in how they encode chain-of-thought ("thinking") on top of it.
//! This crate isolates that difference:
//!
//! - [`strategy`] - the [`ReasoningStrategy`] seam the base gateway delegates
//!   to, plus the [`Passthrough`] implementation for vanilla backends
//! - [`minimax`] - MiniMax's `reasoning_details` encoding: extraction from
//!   messages and deltas, the `reasoning_split` request flag, thinking replay
//!   for interleaved thinking, and the fixed model catalog
//! - [`stream`] - caller-owned accumulation of streamed delta chunks
//! - [`registry`] - configuration-name to strategy lookup
//! - [`config`] - TOML connection settings with env-var expansion
//!
//! # Error Handling
//!
//! Extraction never fails: malformed or missing vendor data degrades to
//! empty results so an evolving backend response cannot crash the calling
//! pipeline. Only configuration loading and registry lookup return errors.
//!
//! ```rust
//! use relay_gateway::registry::strategy_for;
//! use relay_gateway::strategy::ReasoningStrategy as _;
//!
//! let strategy = strategy_for("minimax").unwrap();
//! assert_eq!(strategy.list_models()[0], "MiniMax-M2");
//! ```

pub mod config;
pub mod minimax;
pub mod registry;
pub mod strategy;
pub mod stream;

pub use config::{ConfigError, MinimaxConfig, RelayConfig};
pub use minimax::{MINIMAX_BASE_URL, MINIMAX_MODELS, Minimax};
pub use registry::{UnknownProviderError, default_strategy, strategy_for};
pub use strategy::{ConnectionDefaults, Passthrough, ReasoningStrategy, apply_replay};
pub use stream::StreamAccumulator;

pub use relay_types;
