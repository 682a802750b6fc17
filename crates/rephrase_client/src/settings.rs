//! Request configuration, explicitly constructed and passed in per call.

use rephrase_core::Tone;

/// Default base URL for direct OpenAI-compatible requests.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TEMPERATURE: f32 = 0.5;
const DEFAULT_MAX_REQUEST_TOKENS: u32 = 3000;
const DEFAULT_MAX_TONE_TOKENS: u32 = 3500;

/// Where rephrase requests are sent.
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// Straight to an OpenAI-compatible provider with a secret API key.
    Direct { secret_key: String, api_base: String },
    /// Through an intermediary server holding the provider credentials,
    /// authenticated with a per-user token.
    Proxy {
        user_token: String,
        server_path: String,
    },
}

/// Which tone field joins the text for the tone-aware token check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneField {
    Name,
    #[default]
    Summary,
}

/// Configuration for a rephrase request.
#[derive(Debug, Clone)]
pub struct RephraseSettings {
    pub tone: Tone,
    pub endpoint: Endpoint,
    pub model: String,
    pub temperature: f32,
    /// Ceiling for the primary text plus included history, in tokens.
    pub max_request_tokens: u32,
    /// Ceiling for the primary text joined with the tone descriptor,
    /// checked before direct-provider requests.
    pub max_tone_tokens: u32,
    pub tone_field: ToneField,
}

impl RephraseSettings {
    /// Settings for a direct OpenAI-compatible request with a secret key.
    pub fn direct(secret_key: impl Into<String>, tone: Tone) -> Self {
        Self::with_endpoint(
            Endpoint::Direct {
                secret_key: secret_key.into(),
                api_base: OPENAI_API_BASE.to_string(),
            },
            tone,
        )
    }

    /// Settings for a request through an intermediary server.
    pub fn proxy(
        user_token: impl Into<String>,
        server_path: impl Into<String>,
        tone: Tone,
    ) -> Self {
        Self::with_endpoint(
            Endpoint::Proxy {
                user_token: user_token.into(),
                server_path: server_path.into(),
            },
            tone,
        )
    }

    fn with_endpoint(endpoint: Endpoint, tone: Tone) -> Self {
        Self {
            tone,
            endpoint,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_request_tokens: DEFAULT_MAX_REQUEST_TOKENS,
            max_tone_tokens: DEFAULT_MAX_TONE_TOKENS,
            tone_field: ToneField::default(),
        }
    }

    /// The tone content joined with the text by the tone-aware token check.
    pub fn tone_content(&self) -> String {
        match self.tone_field {
            ToneField::Name => self.tone.name.clone(),
            ToneField::Summary => self.tone.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_settings_carry_the_default_base() {
        let settings = RephraseSettings::direct("sk-test", Tone::neutral());
        match settings.endpoint {
            Endpoint::Direct { ref api_base, .. } => assert_eq!(api_base, OPENAI_API_BASE),
            _ => panic!("expected a direct endpoint"),
        }
        assert_eq!(settings.max_request_tokens, 3000);
        assert_eq!(settings.max_tone_tokens, 3500);
    }

    #[test]
    fn tone_content_follows_the_field_choice() {
        let tone = Tone::new("Curt").with_behavior("Short.");
        let mut settings = RephraseSettings::direct("sk-test", tone);

        assert_eq!(settings.tone_content(), "Curt. Short.");
        settings.tone_field = ToneField::Name;
        assert_eq!(settings.tone_content(), "Curt");
    }
}
