//! rephrase_client - Tone-aware rephrasing over OpenAI-compatible or proxy endpoints
//!
//! The top-level flow for a request:
//! 1. check the primary text against the request token ceiling;
//! 2. for direct requests, check text + tone descriptor against the tone ceiling;
//! 3. validate the credential and, for proxies, the server path;
//! 4. fill the remaining token budget with trailing chat history;
//! 5. forward everything to the configured backend.
//!
//! Errors surface to the caller; nothing is retried here.

pub mod client;
pub mod error;
pub mod provider;
pub mod providers;
pub mod settings;

pub use client::{rephrase, RephraseClient};
pub use error::{RephraseError, Result};
pub use provider::RephraseProvider;
pub use providers::{OpenAiProvider, ProxyProvider};
pub use settings::{Endpoint, RephraseSettings, ToneField};
