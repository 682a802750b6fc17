//! rephrase_core - Core types and token budgeting for the rephrase crates
//!
//! This crate provides the foundational types used across the rephrase crates:
//! - `message` - chat history message types
//! - `tone` - tone descriptors and the built-in defaults
//! - `budget` - token counting and history selection under a token ceiling

pub mod budget;
pub mod message;
pub mod tone;

// Re-export commonly used types
pub use budget::{select_history, HeuristicTokenCounter, SharedTokenCounter, TokenCounter};
pub use message::{Message, MessageRole};
pub use tone::Tone;
