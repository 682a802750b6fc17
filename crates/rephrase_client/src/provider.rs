use async_trait::async_trait;
use rephrase_core::{Message, Tone};

use crate::error::Result;

/// Sends a rephrase request to a text-generation backend.
#[async_trait]
pub trait RephraseProvider: Send + Sync {
    /// Rephrase `text` in the given tone, with `history` as conversation
    /// context. The history has already been filtered to the token budget.
    async fn rephrase(&self, text: &str, tone: &Tone, history: &[Message]) -> Result<String>;
}
