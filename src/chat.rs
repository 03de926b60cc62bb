use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::classifier::{Classification, Classifier};
use crate::models::{ChatMessage, MessageKind};
use crate::pacing::ReplyPacing;
use crate::responder::{Reply, Responder};

#[derive(Debug, Clone)]
pub struct Turn {
    pub user: ChatMessage,
    pub classification: Classification,
    pub reply: Reply,
    /// Wait before showing the reply.
    pub reply_delay: Duration,
    /// Further wait between the reply and its follow-up.
    pub follow_up_delay: Duration,
}

pub struct ChatSession<R> {
    classifier: Classifier,
    responder: Responder,
    pacing: ReplyPacing,
    rng: R,
}

impl<R: Rng> ChatSession<R> {
    pub fn new(classifier: Classifier, responder: Responder, pacing: ReplyPacing, rng: R) -> Self {
        Self {
            classifier,
            responder,
            pacing,
            rng,
        }
    }

    pub fn opening_prompt(&mut self, at: DateTime<Utc>) -> ChatMessage {
        let prompt = self.responder.daily_prompt(&mut self.rng);
        ChatMessage::from_companion(prompt, MessageKind::Prompt, at)
    }

    /// `None` for blank input, which the chat never sends.
    pub fn turn(&mut self, text: &str, at: DateTime<Utc>) -> Option<Turn> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        // classify the raw text, store the trimmed one
        let classification = self.classifier.classify(text);
        let reply = self.responder.respond_to(classification, &mut self.rng);
        let reply_delay = self.pacing.reply_delay(&mut self.rng);

        Some(Turn {
            user: ChatMessage::from_user(trimmed, at),
            classification,
            reply,
            reply_delay,
            follow_up_delay: self.pacing.follow_up_delay,
        })
    }
}
