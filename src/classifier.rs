use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyCategory {
    Crisis,
    FamilyPressure,
    Positive,
    Anxiety,
    Depression,
    Neutral,
}

impl ReplyCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyCategory::Crisis => "crisis",
            ReplyCategory::FamilyPressure => "family_pressure",
            ReplyCategory::Positive => "positive",
            ReplyCategory::Anxiety => "anxiety",
            ReplyCategory::Depression => "depression",
            ReplyCategory::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for ReplyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub crisis: bool,
    /// `Crisis` whenever `crisis` is set.
    pub category: ReplyCategory,
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    lexicon: Lexicon,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn classify(&self, text: &str) -> Classification {
        let folded = text.to_lowercase();

        if self.lexicon.crisis.matches(&folded) {
            return Classification {
                crisis: true,
                category: ReplyCategory::Crisis,
            };
        }

        // Family and cultural pressure outranks positive wording.
        let category = if self.lexicon.family_pressure.matches(&folded) {
            ReplyCategory::FamilyPressure
        } else if self.lexicon.positive.matches(&folded) {
            ReplyCategory::Positive
        } else if self.lexicon.anxiety.matches(&folded) {
            ReplyCategory::Anxiety
        } else if self.lexicon.depression.matches(&folded) {
            ReplyCategory::Depression
        } else {
            ReplyCategory::Neutral
        };

        Classification {
            crisis: false,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::PhraseSet;

    fn classify(text: &str) -> Classification {
        Classifier::default().classify(text)
    }

    #[test]
    fn crisis_overrides_positive_wording() {
        let c = classify("I'm so happy today but I want to end it all");
        assert!(c.crisis);
        assert_eq!(c.category, ReplyCategory::Crisis);
    }

    #[test]
    fn crisis_detected_in_every_bundled_language() {
        for text in [
            "I keep thinking about SUICIDE",
            "अब जीना नहीं चाहता",
            "నాకు చావాలని అనిపిస్తుంది",
            "आपघात करावासा वाटतो",
            "தற்கொலை எண்ணம்",
            "എനിക്ക് മരിക്കാൻ ആഗ്രഹിക്കുന്നു",
        ] {
            assert!(classify(text).crisis, "expected crisis for {text:?}");
        }
    }

    #[test]
    fn family_pressure_beats_positive() {
        let c = classify("I'm happy but the family pressure about arranged marriage is a lot");
        assert!(!c.crisis);
        assert_eq!(c.category, ReplyCategory::FamilyPressure);
    }

    #[test]
    fn priority_order_positive_then_anxiety_then_depression() {
        assert_eq!(
            classify("Grateful, though a bit worried and tired").category,
            ReplyCategory::Positive
        );
        assert_eq!(
            classify("Worried and tired").category,
            ReplyCategory::Anxiety
        );
        assert_eq!(classify("So tired").category, ReplyCategory::Depression);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("I FEEL ANXIOUS").category, ReplyCategory::Anxiety);
    }

    #[test]
    fn negation_is_not_understood() {
        assert_eq!(
            classify("I am not anxious at all").category,
            ReplyCategory::Anxiety
        );
    }

    #[test]
    fn empty_and_whitespace_messages_are_neutral() {
        for text in ["", "   \n\t"] {
            let c = classify(text);
            assert!(!c.crisis);
            assert_eq!(c.category, ReplyCategory::Neutral);
        }
    }

    #[test]
    fn substitute_lexicon_is_honoured() {
        let lexicon = Lexicon {
            crisis: PhraseSet::new(["red alert"]),
            family_pressure: PhraseSet::default(),
            positive: PhraseSet::new(["sunny"]),
            anxiety: PhraseSet::default(),
            depression: PhraseSet::default(),
        };
        let classifier = Classifier::new(lexicon);
        assert!(classifier.classify("Red Alert!").crisis);
        assert_eq!(
            classifier.classify("a sunny day").category,
            ReplyCategory::Positive
        );
        assert_eq!(
            classifier.classify("suicide").category,
            ReplyCategory::Neutral
        );
    }
}
