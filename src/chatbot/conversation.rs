use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    chatbot::reply,
    i18n::{translate, Language},
};

const MIN_TYPING_MS: f64 = 1000.0;
const TYPING_SPREAD_MS: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            timestamp: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            timestamp: Utc::now(),
        }
    }
}

/// Message history of the chat widget. Entries are only ever appended.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    is_typing: bool,
}

impl Conversation {
    pub fn new(language: Language) -> Self {
        Self {
            messages: vec![Message::bot(translate(language, "chatbot.welcome"))],
            is_typing: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Records a user message and returns the text the assistant should answer.
    /// Blank input is ignored, as is anything sent while a reply is pending.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if self.is_typing || input.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(input));
        self.is_typing = true;
        Some(input.to_string())
    }

    /// Submits `input` and resolves the answer in `language` right away,
    /// so a later language switch doesn't change a reply already on its way.
    pub fn respond(&mut self, input: &str, language: Language) -> Option<String> {
        let utterance = self.submit(input)?;
        Some(reply(&utterance, language))
    }

    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.messages.push(Message::bot(text));
        self.is_typing = false;
    }
}

/// Simulated "typing" time before a reply shows up.
///
/// `sample` is a uniform value in `[0, 1)`; out of range values are clamped.
pub fn typing_delay(sample: f64) -> Duration {
    let sample = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(0.0, 1.0)
    };
    Duration::from_millis((MIN_TYPING_MS + sample * TYPING_SPREAD_MS).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_welcome() {
        let conv = Conversation::new(Language::English);
        assert_eq!(conv.messages().len(), 1);
        let welcome = &conv.messages()[0];
        assert!(!welcome.is_user);
        assert!(welcome.text.contains("virtual assistant"));
        assert!(!conv.is_typing());
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut conv = Conversation::new(Language::French);
        assert_eq!(conv.submit(""), None);
        assert_eq!(conv.submit("   \n\t"), None);
        assert_eq!(conv.messages().len(), 1);
        assert!(!conv.is_typing());
    }

    #[test]
    fn test_submit_and_reply() {
        let mut conv = Conversation::new(Language::French);
        let pending = conv.submit("  Bonjour ");
        assert_eq!(pending.as_deref(), Some("  Bonjour "));
        assert!(conv.is_typing());
        assert_eq!(conv.messages().len(), 2);
        assert!(conv.messages()[1].is_user);
        assert_eq!(conv.messages()[1].text, "  Bonjour ");

        conv.push_reply("Salut");
        assert!(!conv.is_typing());
        let last = conv.messages().last().expect("should have a reply");
        assert!(!last.is_user);
        assert_eq!(last.text, "Salut");
        assert!(conv.messages()[1].timestamp <= last.timestamp);
    }

    #[test]
    fn test_single_pending_reply() {
        let mut conv = Conversation::new(Language::French);
        assert!(conv.submit("bonjour").is_some());
        assert_eq!(conv.submit("merci"), None);
        assert_eq!(conv.messages().len(), 2);
        assert!(conv.is_typing());

        conv.push_reply("Salut");
        assert!(!conv.is_typing());
        assert_eq!(conv.submit("merci").as_deref(), Some("merci"));
        assert!(conv.is_typing());
        assert_eq!(conv.messages().len(), 4);
    }

    #[test]
    fn test_respond_uses_send_time_language() {
        let mut conv = Conversation::new(Language::French);
        let answer = conv.respond("merci", Language::French).expect("should answer");
        assert_eq!(answer, translate(Language::French, "chatbot.thanks"));
        assert_ne!(answer, translate(Language::English, "chatbot.thanks"));

        // still typing, nothing new is accepted
        assert_eq!(conv.respond("hello", Language::English), None);

        conv.push_reply(answer.clone());
        assert_eq!(conv.messages().last().map(|m| m.text.as_str()), Some(answer.as_str()));
        assert_eq!(conv.respond("   ", Language::English), None);
    }

    #[test]
    fn test_typing_delay_bounds() {
        assert_eq!(typing_delay(0.0), Duration::from_millis(1000));
        assert_eq!(typing_delay(0.5), Duration::from_millis(1500));
        assert_eq!(typing_delay(1.0), Duration::from_millis(2000));
        assert_eq!(typing_delay(-3.0), Duration::from_millis(1000));
        assert_eq!(typing_delay(7.0), Duration::from_millis(2000));
        assert_eq!(typing_delay(f64::NAN), Duration::from_millis(1000));
        for _ in 0..100 {
            let d = typing_delay(fastrand::f64());
            assert!(d >= Duration::from_millis(1000) && d <= Duration::from_millis(2000));
        }
    }
}
