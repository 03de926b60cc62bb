use serde::{Deserialize, Serialize};

// ── Keyword sets ───────────────────────────────────────────

const CRISIS_KW: &[&str] = &[
    // English
    "suicide",
    "kill myself",
    "end it all",
    "don't want to live",
    "hurt myself",
    "self harm",
    "cutting",
    "dying",
    "hopeless",
    "no point",
    "give up",
    // Hindi
    "मरना चाहता हूं",
    "आत्महत्या",
    "जीना नहीं चाहता",
    "खुद को नुकसान",
    // Telugu
    "చావాలని అనిపిస్తుంది",
    // Marathi
    "आपघात",
    "मृत्यू",
    // Tamil
    "தற்கொலை",
    // Malayalam
    "മരിക്കാൻ ആഗ്രഹിക്കുന്നു",
];

const POSITIVE_KW: &[&str] = &[
    "happy",
    "excited",
    "great",
    "amazing",
    "wonderful",
    "fantastic",
    "awesome",
    "accomplished",
    "proud",
    "grateful",
    "blessed",
    "thankful",
    "joy",
    "love",
    "खुश",
    "प्रसन्न",
    "आनंदित",
    "गर्व",
    "कृतज्ञ",
    "धन्यवाद",
    "खुशी",
    "प्रेम",
    "సంతోషం",
    "గర్వం",
    "కృతజ్ఞత",
    "खूप आनंद",
    "खूप छान",
    "மகிழ்ச்சி",
    "गुरुर",
    "സന്തോഷം",
];

const ANXIETY_KW: &[&str] = &[
    "anxious",
    "worried",
    "panic",
    "scared",
    "nervous",
    "overwhelmed",
    "stress",
    "fear",
    "racing thoughts",
    "can't breathe",
    "heart racing",
    "dizzy",
    "चिंता",
    "घबराहट",
    "डर",
    "तनाव",
    "परेशान",
    "व्याकुल",
    "भयभीत",
    "ఆందోళన",
    "భయం",
    "టెన్షన",
    "भीती",
    "கவலை",
    "பயம்",
    "ഉത്കണ്ഠ",
    "ഭയം",
];

const DEPRESSION_KW: &[&str] = &[
    "depressed",
    "sad",
    "down",
    "empty",
    "numb",
    "tired",
    "exhausted",
    "lonely",
    "worthless",
    "failed",
    "disappointed",
    "lost",
    "dark",
    "heavy",
    "उदास",
    "दुखी",
    "अकेला",
    "निराश",
    "हताश",
    "थका हुआ",
    "खाली",
    "దిగులు",
    "దుఃఖం",
    "ఒంటరితనం",
    "निराशा",
    "दुःख",
    "வருத்தம்",
    "தனிமை",
    "ദുഃഖം",
    "ഏകാന്തത",
];

const FAMILY_PRESSURE_KW: &[&str] = &[
    "family pressure",
    "arranged marriage",
    "career pressure",
    "parents expectations",
    "society pressure",
    "relatives",
    "comparison",
    "family honor",
    "izzat",
    "पारिवारिक दबाव",
    "माता-पिता का दबाव",
    "समाज का दबाव",
    "रिश्तेदार",
    "इज्जत",
    "కుటుంబ ఒత్తిడి",
    "తల్లిదండ్రుల అంచనలు",
    "సమాజ ఒత్తిడి",
    "कुटुंब दबाव",
    "पालकांचे अपेक्षा",
];

/// A set of lower-cased trigger phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSet {
    phrases: Vec<String>,
}

impl PhraseSet {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|phrase| phrase.as_ref().to_lowercase())
                .filter(|phrase| !phrase.is_empty())
                .collect(),
        }
    }

    /// `folded` must already be lower-cased.
    pub fn matches(&self, folded: &str) -> bool {
        self.phrases.iter().any(|phrase| folded.contains(phrase.as_str()))
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Immutable keyword configuration handed to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub crisis: PhraseSet,
    pub family_pressure: PhraseSet,
    pub positive: PhraseSet,
    pub anxiety: PhraseSet,
    pub depression: PhraseSet,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            crisis: PhraseSet::new(CRISIS_KW),
            family_pressure: PhraseSet::new(FAMILY_PRESSURE_KW),
            positive: PhraseSet::new(POSITIVE_KW),
            anxiety: PhraseSet::new(ANXIETY_KW),
            depression: PhraseSet::new(DEPRESSION_KW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Classifier, ReplyCategory};

    #[test]
    fn phrases_are_folded_on_construction() {
        let set = PhraseSet::new(["Family Pressure", ""]);
        assert_eq!(set.len(), 1);
        assert!(set.matches("so much family pressure lately"));
    }

    #[test]
    fn default_lexicon_covers_every_category() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.crisis.is_empty());
        assert!(!lexicon.family_pressure.is_empty());
        assert!(!lexicon.positive.is_empty());
        assert!(!lexicon.anxiety.is_empty());
        assert!(!lexicon.depression.is_empty());
    }

    #[test]
    fn matching_is_plain_substring() {
        let lexicon = Lexicon::default();
        // "sad" inside another word still counts
        assert!(lexicon.depression.matches("crusade"));
        assert!(lexicon.anxiety.matches("i am not anxious"));
        assert!(!lexicon.crisis.matches("just a normal day"));
    }

    #[test]
    fn non_latin_phrases_match() {
        let lexicon = Lexicon::default();
        assert!(lexicon.crisis.matches("मुझे आत्महत्या के विचार आते हैं"));
        assert!(lexicon.positive.matches("இன்று மகிழ்ச்சி"));
    }

    #[test]
    fn every_crisis_phrase_wins_over_positive_wording() {
        let classifier = Classifier::default();
        for phrase in CRISIS_KW {
            let text = format!("I'm so happy today, {phrase}, खुश");
            let c = classifier.classify(&text);
            assert!(c.crisis, "expected crisis for {text:?}");
            assert_eq!(c.category, ReplyCategory::Crisis, "{text:?}");
        }
    }

    #[test]
    fn every_family_phrase_wins_over_positive_wording() {
        let classifier = Classifier::default();
        for phrase in FAMILY_PRESSURE_KW {
            let text = format!("I'm so happy today, but {phrase}, खुश");
            let c = classifier.classify(&text);
            assert!(!c.crisis, "unexpected crisis for {text:?}");
            assert_eq!(c.category, ReplyCategory::FamilyPressure, "{text:?}");
        }
    }

    #[test]
    fn tamil_sadness_is_matched_in_tamil_script() {
        let classifier = Classifier::default();
        assert_eq!(
            classifier.classify("இன்று வருத்தம்").category,
            ReplyCategory::Depression
        );
        // the mixed Tamil and Devanagari spelling no longer matches
        assert_eq!(
            classifier.classify("வருத्तम्").category,
            ReplyCategory::Neutral
        );
    }
}
