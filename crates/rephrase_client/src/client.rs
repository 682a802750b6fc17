//! Top-level rephrase orchestration.

use std::sync::Arc;

use log::debug;
use url::Url;

use rephrase_core::{select_history, HeuristicTokenCounter, Message, TokenCounter};

use crate::error::{RephraseError, Result};
use crate::provider::RephraseProvider;
use crate::providers::{OpenAiProvider, ProxyProvider};
use crate::settings::{Endpoint, RephraseSettings};

/// Tone-aware rephrasing client.
///
/// Owns the configuration and the two collaborators: a token counter for
/// budgeting and a provider for the remote call. Both can be swapped out.
pub struct RephraseClient {
    settings: RephraseSettings,
    counter: Arc<dyn TokenCounter>,
    provider: Arc<dyn RephraseProvider>,
}

impl RephraseClient {
    /// Build a client with the provider implied by the endpoint and the
    /// default heuristic token counter.
    pub fn new(settings: RephraseSettings) -> Self {
        let provider: Arc<dyn RephraseProvider> = match &settings.endpoint {
            Endpoint::Direct {
                secret_key,
                api_base,
            } => Arc::new(
                OpenAiProvider::new(secret_key.clone())
                    .with_base_url(api_base.clone())
                    .with_model(settings.model.clone())
                    .with_temperature(settings.temperature),
            ),
            Endpoint::Proxy {
                user_token,
                server_path,
            } => Arc::new(ProxyProvider::new(user_token.clone(), server_path.clone())),
        };
        Self {
            settings,
            counter: Arc::new(HeuristicTokenCounter::with_defaults()),
            provider,
        }
    }

    pub fn with_counter(mut self, counter: Arc<dyn TokenCounter>) -> Self {
        self.counter = counter;
        self
    }

    pub fn with_provider(mut self, provider: Arc<dyn RephraseProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Rephrase `text` in the configured tone, including as much trailing
    /// `history` as the token budget allows.
    pub async fn rephrase(&self, text: &str, history: &[Message]) -> Result<String> {
        let settings = &self.settings;

        let text_tokens = self.counter.count_text(text);
        if text_tokens > settings.max_request_tokens {
            return Err(RephraseError::TokenLimitExceeded {
                tokens: text_tokens,
                ceiling: settings.max_request_tokens,
            });
        }

        if matches!(settings.endpoint, Endpoint::Direct { .. }) {
            let combined = format!("{} {}", text, settings.tone_content());
            let combined_tokens = self.counter.count_text(&combined);
            if combined_tokens > settings.max_tone_tokens {
                return Err(RephraseError::TokenLimitExceeded {
                    tokens: combined_tokens,
                    ceiling: settings.max_tone_tokens,
                });
            }
        }

        validate_endpoint(&settings.endpoint)?;

        let remaining = settings.max_request_tokens - text_tokens;
        let filtered = select_history(history, remaining, self.counter.as_ref());
        if filtered.len() < history.len() {
            debug!(
                "history trimmed to {} of {} messages for a {}-token budget",
                filtered.len(),
                history.len(),
                remaining
            );
        }

        self.provider
            .rephrase(text, &settings.tone, filtered)
            .await
    }
}

fn validate_endpoint(endpoint: &Endpoint) -> Result<()> {
    match endpoint {
        Endpoint::Direct { secret_key, .. } => {
            if secret_key.trim().is_empty() {
                return Err(RephraseError::MissingCredential("secret key"));
            }
        }
        Endpoint::Proxy {
            user_token,
            server_path,
        } => {
            if user_token.trim().is_empty() {
                return Err(RephraseError::MissingCredential("user token"));
            }
            let url = Url::parse(server_path).map_err(|err| {
                RephraseError::InvalidEndpoint(format!("{}: {}", server_path, err))
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(RephraseError::InvalidEndpoint(format!(
                    "{}: unsupported scheme {}",
                    server_path,
                    url.scheme()
                )));
            }
        }
    }
    Ok(())
}

/// One-shot rephrase with the default collaborators.
///
/// Pass an empty slice for `history` to rephrase without context.
pub async fn rephrase(
    text: &str,
    history: &[Message],
    settings: RephraseSettings,
) -> Result<String> {
    RephraseClient::new(settings).rephrase(text, history).await
}
