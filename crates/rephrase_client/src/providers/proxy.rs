use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use rephrase_core::{Message, Tone};

use crate::error::{RephraseError, Result};
use crate::provider::RephraseProvider;

/// Backend that forwards through an intermediary server holding the provider
/// credentials. The client only carries a per-user token.
pub struct ProxyProvider {
    client: Client,
    user_token: String,
    server_path: String,
}

impl ProxyProvider {
    pub fn new(user_token: impl Into<String>, server_path: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            user_token: user_token.into(),
            server_path: server_path.into(),
        }
    }
}

#[derive(Serialize)]
struct ProxyRequest<'a> {
    text: &'a str,
    tone: &'a Tone,
    history: &'a [Message],
}

#[derive(Deserialize)]
struct ProxyResponse {
    answer: String,
}

#[async_trait]
impl RephraseProvider for ProxyProvider {
    async fn rephrase(&self, text: &str, tone: &Tone, history: &[Message]) -> Result<String> {
        let url = format!("{}/rephrase", self.server_path.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .header("Authorization", &self.user_token)
            .json(&ProxyRequest {
                text,
                tone,
                history,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(RephraseError::Api(format!("HTTP {}: {}", status, text)));
        }

        let reply: ProxyResponse = response.json().await?;
        Ok(reply.answer)
    }
}
