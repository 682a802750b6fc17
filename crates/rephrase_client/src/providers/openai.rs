use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use rephrase_core::{Message, MessageRole, Tone};

use crate::error::{RephraseError, Result};
use crate::provider::RephraseProvider;
use crate::settings::OPENAI_API_BASE;

/// Direct OpenAI-compatible chat completions backend.
pub struct OpenAiProvider {
    client: Client,
    secret_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            secret_key: secret_key.into(),
            base_url: OPENAI_API_BASE.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.5,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn build_messages(text: &str, tone: &Tone, history: &[Message]) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage {
            role: "system",
            content: format!(
                "You rephrase the user's message, keeping its meaning. \
                 Apply the following tone: {}",
                tone.summary()
            ),
        });
        for entry in history {
            messages.push(ChatMessage {
                role: match entry.role {
                    MessageRole::Me => "assistant",
                    MessageRole::Other => "user",
                },
                content: entry.text.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: format!("Rephrase: {}", text),
        });
        messages
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[async_trait]
impl RephraseProvider for OpenAiProvider {
    async fn rephrase(&self, text: &str, tone: &Tone, history: &[Message]) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: Self::build_messages(text, tone, history),
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(RephraseError::Api(format!("HTTP {}: {}", status, text)));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| RephraseError::Api("response carried no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_messages_wraps_history_between_system_and_user() {
        let tone = Tone::new("Curt").with_behavior("Short.");
        let history = vec![Message::other("Any update?"), Message::me("Almost done")];

        let messages = OpenAiProvider::build_messages("I will ship it tomorrow", &tone, &history);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("Curt. Short."));
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "Any update?");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[2].content, "Almost done");
        assert_eq!(messages[3].role, "user");
        assert!(messages[3].content.ends_with("I will ship it tomorrow"));
    }

    #[test]
    fn build_messages_without_history() {
        let messages = OpenAiProvider::build_messages("hello", &Tone::neutral(), &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }
}
