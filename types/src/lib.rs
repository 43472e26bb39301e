//! Core wire types for Relay.
//!
//! This crate contains pure domain types with no IO and no async: the
//! canonical reasoning encoding ([`ReasoningDetail`], [`ReasoningBundle`])
//! and the slice of the base gateway's chat schema the reasoning layer reads
//! ([`ChatMessage`], [`ChatDelta`]). Everything here can be used from any
//! layer of the application.

pub mod chat;
pub mod reasoning;

pub use chat::{ChatDelta, ChatMessage};
pub use reasoning::{ReasoningBundle, ReasoningDetail, ReasoningSource};
