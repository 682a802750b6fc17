//! Tone - Named style descriptors for rephrasing
//!
//! A tone is identified solely by its name: two tones with the same name and
//! different behavior or icon are the same tone as far as the registry and
//! equality are concerned.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A named style descriptor applied to rephrasing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tone {
    /// Unique identity key.
    pub name: String,
    /// Longer description used for prompt construction.
    pub behavior: Option<String>,
    /// Display-only marker, ignored by all algorithms.
    pub icon: Option<String>,
}

impl Tone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            behavior: None,
            icon: None,
        }
    }

    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.behavior = Some(behavior.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The name, extended with the behavior description when one is set.
    pub fn summary(&self) -> String {
        let mut summary = self.name.clone();
        if let Some(behavior) = &self.behavior {
            if !behavior.is_empty() {
                summary.push_str(". ");
                summary.push_str(behavior);
            }
        }
        summary
    }

    /// The ten built-in tones in canonical order.
    pub fn defaults() -> Vec<Tone> {
        vec![
            Tone::professional(),
            Tone::friendly(),
            Tone::encouraging(),
            Tone::empathetic(),
            Tone::neutral(),
            Tone::assertive(),
            Tone::instructive(),
            Tone::persuasive(),
            Tone::sarcastic(),
            Tone::poetic(),
        ]
    }

    pub fn professional() -> Tone {
        Tone::new("Professional Tone")
            .with_behavior(
                "This would edit messages to sound more formal, using technical vocabulary, \
                 clear sentence structures, and maintaining a respectful tone. It would avoid \
                 colloquial language and ensure appropriate salutations and sign-offs.",
            )
            .with_icon("👔")
    }

    pub fn friendly() -> Tone {
        Tone::new("Friendly Tone")
            .with_behavior(
                "This would adjust messages to reflect a casual, friendly tone. It would \
                 incorporate casual language, use emoticons, exclamation points, and other \
                 informalities to make the message seem more friendly and approachable.",
            )
            .with_icon("🤝")
    }

    pub fn encouraging() -> Tone {
        Tone::new("Encouraging Tone")
            .with_behavior(
                "This tone would be useful for motivation and encouragement. It would include \
                 positive words, affirmations, and express support and belief in the recipient.",
            )
            .with_icon("💪")
    }

    pub fn empathetic() -> Tone {
        Tone::new("Empathetic Tone")
            .with_behavior(
                "This tone would be utilized to display understanding and empathy. It would \
                 involve softer language, acknowledging feelings, and demonstrating compassion \
                 and support.",
            )
            .with_icon("🤲")
    }

    pub fn neutral() -> Tone {
        Tone::new("Neutral Tone")
            .with_behavior(
                "For times when you want to maintain an even, unbiased, and objective tone. \
                 It would avoid extreme language and emotive words, opting for clear, \
                 straightforward communication.",
            )
            .with_icon("😐")
    }

    pub fn assertive() -> Tone {
        Tone::new("Assertive Tone")
            .with_behavior(
                "This tone is beneficial for making clear points, standing ground, or in \
                 negotiations. It uses direct language, is confident, and does not mince words.",
            )
            .with_icon("🔨")
    }

    pub fn instructive() -> Tone {
        Tone::new("Instructive Tone")
            .with_behavior(
                "This tone would be useful for tutorials, guides, or other teaching and \
                 training materials. It is clear, concise, and walks the reader through steps \
                 or processes in a logical manner.",
            )
            .with_icon("📚")
    }

    pub fn persuasive() -> Tone {
        Tone::new("Persuasive Tone")
            .with_behavior(
                "This tone can be used when trying to convince someone or argue a point. It \
                 uses persuasive language, powerful words, and logical reasoning.",
            )
            .with_icon("👆")
    }

    pub fn sarcastic() -> Tone {
        Tone::new("Sarcastic/Ironic Tone")
            .with_behavior(
                "This tone can make the communication more humorous or show an ironic stance. \
                 It is harder to implement as it requires the AI to understand nuanced language \
                 and may not always be taken as intended by the reader.",
            )
            .with_icon("😏")
    }

    pub fn poetic() -> Tone {
        Tone::new("Poetic Tone")
            .with_behavior(
                "This would add an artistic touch to messages, using figurative language, \
                 rhymes, and rhythm to create a more expressive text.",
            )
            .with_icon("🎭")
    }
}

// Identity is the name alone.
impl PartialEq for Tone {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tone {}

impl Hash for Tone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
