//! Token counting for request budgeting.
//!
//! Provides heuristic token estimation (chars/4 + 10% margin) behind a trait
//! so embedders can substitute an exact tokenizer for their provider.

use crate::message::Message;
use std::sync::Arc;

/// Trait for token counting implementations.
///
/// Counts must be deterministic, pure functions of the text.
pub trait TokenCounter: Send + Sync {
    /// Count tokens in a plain text string.
    fn count_text(&self, text: &str) -> u32;

    /// Count tokens in a single history message.
    fn count_message(&self, message: &Message) -> u32 {
        self.count_text(&message.text)
    }

    /// Count tokens in multiple messages.
    fn count_messages(&self, messages: &[Message]) -> u32 {
        messages
            .iter()
            .fold(0u32, |acc, m| acc.saturating_add(self.count_message(m)))
    }
}

/// Heuristic token counter using character-based estimation.
///
/// Uses the approximation: tokens ≈ characters / 4, with a safety margin
/// multiplier. This is intentionally conservative to avoid underestimating
/// what the remote tokenizer will count.
#[derive(Debug, Clone)]
pub struct HeuristicTokenCounter {
    /// Characters per token ratio (default: 4)
    chars_per_token: f64,
    /// Safety margin multiplier (default: 1.1 = 10% extra)
    safety_margin: f64,
}

impl HeuristicTokenCounter {
    /// Create a new heuristic counter with custom parameters.
    pub fn new(chars_per_token: f64, safety_margin: f64) -> Self {
        Self {
            chars_per_token,
            safety_margin,
        }
    }

    /// Create with default parameters (chars/4 + 10% margin).
    pub fn with_defaults() -> Self {
        Self {
            chars_per_token: 4.0,
            safety_margin: 1.1,
        }
    }
}

impl Default for HeuristicTokenCounter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TokenCounter for HeuristicTokenCounter {
    fn count_text(&self, text: &str) -> u32 {
        if text.is_empty() {
            return 0;
        }

        let char_count = text.chars().count() as f64;
        let base_tokens = char_count / self.chars_per_token;
        let adjusted_tokens = base_tokens * self.safety_margin;

        adjusted_tokens.ceil() as u32
    }
}

/// Arc-wrapped token counter for easy sharing.
pub type SharedTokenCounter = Arc<dyn TokenCounter>;
