use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::classifier::{Classification, Classifier, ReplyCategory};
use crate::models::{ChatMessage, MessageKind};
use crate::responses::ResponseBank;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Crisis {
        message: String,
        resources: Vec<String>,
    },
    Categorized {
        category: ReplyCategory,
        message: String,
        follow_up: Option<String>,
    },
}

/// Display styling hint for a reply bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTone {
    Supportive,
    Crisis,
    Celebration,
}

impl Reply {
    pub fn category(&self) -> ReplyCategory {
        match self {
            Reply::Crisis { .. } => ReplyCategory::Crisis,
            Reply::Categorized { category, .. } => *category,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Reply::Crisis { message, .. } | Reply::Categorized { message, .. } => message,
        }
    }

    pub fn follow_up(&self) -> Option<&str> {
        match self {
            Reply::Crisis { .. } => None,
            Reply::Categorized { follow_up, .. } => follow_up.as_deref(),
        }
    }

    pub fn resources(&self) -> &[String] {
        match self {
            Reply::Crisis { resources, .. } => resources,
            Reply::Categorized { .. } => &[],
        }
    }

    pub fn tone(&self) -> ReplyTone {
        match self.category() {
            ReplyCategory::Crisis => ReplyTone::Crisis,
            ReplyCategory::Positive => ReplyTone::Celebration,
            _ => ReplyTone::Supportive,
        }
    }

    /// Companion chat messages for this reply: the primary message tagged
    /// `crisis` or `text`, then the follow-up tagged `prompt`.
    pub fn into_messages(self, sent_at: DateTime<Utc>) -> Vec<ChatMessage> {
        match self {
            Reply::Crisis { message, .. } => {
                vec![ChatMessage::from_companion(message, MessageKind::Crisis, sent_at)]
            }
            Reply::Categorized {
                message, follow_up, ..
            } => {
                let mut messages =
                    vec![ChatMessage::from_companion(message, MessageKind::Text, sent_at)];
                if let Some(follow_up) = follow_up {
                    messages.push(ChatMessage::from_companion(
                        follow_up,
                        MessageKind::Prompt,
                        sent_at,
                    ));
                }
                messages
            }
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[derive(Debug, Clone, Default)]
pub struct Responder {
    bank: ResponseBank,
}

impl Responder {
    pub fn new(bank: ResponseBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &ResponseBank {
        &self.bank
    }

    /// Builds a reply. Draws happen in a fixed order (template, fragment,
    /// follow-up) so a seeded rng always yields the same reply.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        category: ReplyCategory,
        crisis: bool,
        rng: &mut R,
    ) -> Reply {
        let entry = match self.bank.entry(category) {
            Some(entry) if !crisis => entry,
            _ => return self.crisis_reply(rng),
        };

        let message = match entry.templates.choose(rng) {
            Some(template) => template.render(pick(template.fragments, rng)),
            None => String::new(),
        };
        let follow_up = Some(pick(entry.follow_ups, rng))
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Reply::Categorized {
            category,
            message,
            follow_up,
        }
    }

    pub fn respond_to<R: Rng + ?Sized>(&self, classification: Classification, rng: &mut R) -> Reply {
        self.respond(classification.category, classification.crisis, rng)
    }

    /// Classifies `text` and answers it in one go.
    pub fn reply_for<R: Rng + ?Sized>(
        &self,
        classifier: &Classifier,
        text: &str,
        rng: &mut R,
    ) -> Reply {
        self.respond_to(classifier.classify(text), rng)
    }

    pub fn daily_prompt<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        pick(self.bank.daily_prompts, rng)
    }

    fn crisis_reply<R: Rng + ?Sized>(&self, rng: &mut R) -> Reply {
        Reply::Crisis {
            message: pick(self.bank.crisis_templates, rng).to_string(),
            resources: self
                .bank
                .crisis_resources
                .iter()
                .map(|resource| resource.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL: [ReplyCategory; 6] = [
        ReplyCategory::Crisis,
        ReplyCategory::FamilyPressure,
        ReplyCategory::Positive,
        ReplyCategory::Anxiety,
        ReplyCategory::Depression,
        ReplyCategory::Neutral,
    ];

    #[test]
    fn crisis_flag_always_wins() {
        let responder = Responder::default();
        let mut rng = StdRng::seed_from_u64(7);
        for category in ALL {
            let reply = responder.respond(category, true, &mut rng);
            assert_eq!(reply.category(), ReplyCategory::Crisis);
            assert_eq!(reply.tone(), ReplyTone::Crisis);
            assert!(reply.follow_up().is_none());
            assert_eq!(
                reply.resources(),
                &[
                    "Kiran Mental Health Helpline: 1800-599-0019".to_string(),
                    "Vandrevala Foundation: 9999-666-555".to_string(),
                    "Aasra Mumbai: 022-2754-6669".to_string(),
                ]
            );
            assert!(responder.bank().crisis_templates.contains(&reply.message()));
        }
    }

    #[test]
    fn crisis_category_without_flag_takes_crisis_path() {
        let responder = Responder::default();
        let reply = responder.respond(ReplyCategory::Crisis, false, &mut StepRng::new(0, 0));
        assert!(matches!(reply, Reply::Crisis { .. }));
    }

    #[test]
    fn non_crisis_replies_keep_category_and_carry_follow_up() {
        let responder = Responder::default();
        let mut rng = StdRng::seed_from_u64(42);
        for category in ALL.into_iter().skip(1) {
            for _ in 0..20 {
                let reply = responder.respond(category, false, &mut rng);
                assert_eq!(reply.category(), category);
                assert!(reply.resources().is_empty());
                assert!(!reply.message().is_empty());
                let follow_up = reply.follow_up().expect("follow-up");
                let pool = responder.bank().entry(category).unwrap().follow_ups;
                assert!(pool.contains(&follow_up));
            }
        }
    }

    #[test]
    fn zero_rng_selects_first_template_fragment_and_follow_up() {
        let responder = Responder::default();
        let reply = responder.respond(ReplyCategory::Anxiety, false, &mut StepRng::new(0, 0));
        assert_eq!(
            reply.message(),
            "मैं समझता हूं कि आप अभी चिंतित महसूस कर रहे हैं। \
             मैं आपकी बात सुन रहा हूं, और मैं चाहता हूं कि आप जानें कि आपकी भावनाएं वैध हैं। ऐसा महसूस करना ठीक है। \
             जब हम चिंतित होते हैं, तो सांस लेने और ग्राउंडिंग तकनीकों पर ध्यान देना मददगार हो सकता है।"
        );
        assert_eq!(
            reply.follow_up(),
            Some("क्या आप मेरे साथ एक सरल सांस लेने का अभ्यास करना चाहेंगे? / Would you like to try a simple breathing exercise together?")
        );

        let reply = responder.respond(ReplyCategory::FamilyPressure, false, &mut StepRng::new(0, 0));
        assert_eq!(
            reply.message(),
            "मैं समझता हूं कि भारतीय समाज में पारिवारिक और सामाजिक दबाव कितना कठिन हो सकता है। आपकी भावनाएं वैध हैं। \
             परिवार से बात करना कभी-कभी मुश्किल होता है, लेकिन आपकी भावनाओं को व्यक्त करना महत्वपूर्ण है।"
        );
    }

    #[test]
    fn positive_replies_are_celebrations() {
        let responder = Responder::default();
        let reply = responder.respond(ReplyCategory::Positive, false, &mut StepRng::new(0, 0));
        assert_eq!(reply.tone(), ReplyTone::Celebration);
        assert!(reply.message().starts_with("यह सुनकर बहुत अच्छा लगा!"));
        for seed in 0..8 {
            let reply = responder.respond(
                ReplyCategory::Positive,
                false,
                &mut StdRng::seed_from_u64(seed),
            );
            assert_eq!(
                reply.follow_up(),
                Some("इन सकारात्मक भावनाओं में सबसे ज्यादा योगदान किस बात का है? / What's contributing most to these positive feelings?")
            );
        }
    }

    #[test]
    fn same_seed_same_reply() {
        let responder = Responder::default();
        let classifier = Classifier::default();
        for text in ["I feel so lonely", "family pressure again", "hello", "I want to hurt myself"] {
            let a = responder.reply_for(&classifier, text, &mut StdRng::seed_from_u64(99));
            let b = responder.reply_for(&classifier, text, &mut StdRng::seed_from_u64(99));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn daily_prompt_comes_from_pool_and_is_deterministic() {
        let responder = Responder::default();
        let a = responder.daily_prompt(&mut StdRng::seed_from_u64(3));
        let b = responder.daily_prompt(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        assert!(responder.bank().daily_prompts.contains(&a));
        assert_eq!(
            responder.daily_prompt(&mut StepRng::new(0, 0)),
            responder.bank().daily_prompts[0]
        );
    }

    #[test]
    fn messages_are_tagged_by_responder() {
        let now = Utc::now();
        let responder = Responder::default();

        let crisis = responder.respond(ReplyCategory::Neutral, true, &mut StepRng::new(0, 0));
        let messages = crisis.into_messages(now);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, Some(MessageKind::Crisis));

        let neutral = responder.respond(ReplyCategory::Neutral, false, &mut StepRng::new(0, 0));
        let messages = neutral.into_messages(now);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].kind, Some(MessageKind::Text));
        assert_eq!(messages[1].kind, Some(MessageKind::Prompt));
        assert!(messages
            .iter()
            .all(|m| m.sender == crate::models::Sender::Companion));
    }
}
