use crate::classifier::ReplyCategory;

const SUPPORTIVE: &[&str] = &[
    "मैं आपकी बात सुन रहा हूं, और मैं चाहता हूं कि आप जानें कि आपकी भावनाएं वैध हैं। ऐसा महसूस करना ठीक है।",
    "आपने मेरे साथ साझा करने के लिए धन्यवाद। अपनी भावनाओं को व्यक्त करने के लिए साहस की आवश्यकता होती है।",
    "I hear you, and I want you to know that your feelings are valid. It's okay to feel this way.",
    "Thank you for sharing with me. It takes courage to express how you're feeling.",
    "मैं यहां आपकी बात सुनने और इस यात्रा में आपका साथ देने के लिए हूं। आप इसमें अकेले नहीं हैं।",
    "I'm here to listen and support you through this. You're not alone in this journey.",
    "आपकी भावनाएं मायने रखती हैं, और आप भी मायने रखते हैं। आइए इसे एक साथ हल करते हैं।",
    "Your feelings matter, and so do you. Let's work through this together.",
];

const CULTURAL_LEADS: &[&str] = &[
    "मैं समझता हूं कि भारतीय समाज में पारिवारिक और सामाजिक दबाव कितना कठिन हो सकता है। आपकी भावनाएं वैध हैं।",
    "I understand how challenging family and societal pressures can be in Indian society. Your feelings are valid.",
    "कभी-कभी हमारे सपने और परिवार की अपेक्षाओं के बीच संतुलन बनाना मुश्किल होता है। यह संघर्ष सामान्य है।",
    "Sometimes it's difficult to balance our dreams with family expectations. This struggle is normal.",
    "आपकी खुशी और मानसिक स्वास्थ्य उतना ही महत्वपूर्ण है जितना कि दूसरों की अपेक्षाएं।",
    "Your happiness and mental health are just as important as others' expectations.",
];

const FAMILY_FRAGMENTS: &[&str] = &[
    "परिवार से बात करना कभी-कभी मुश्किल होता है, लेकिन आपकी भावनाओं को व्यक्त करना महत्वपूर्ण है।",
    "It's important to find a balance between respecting family values and taking care of your own wellbeing.",
    "आपके सपने और लक्ष्य भी उतने ही महत्वपूर्ण हैं। धीरे-धीरे अपनी बात रखने की कोशिश करें।",
];

const CELEBRATION_FRAGMENTS: &[&str] = &[
    "इन पलों का जश्न मनाना महत्वपूर्ण है।",
    "These feelings are just as valid and important to acknowledge.",
    "मुझे और जानना अच्छा लगेगा कि आपको खुशी क्या दे रही है।",
];

const FAMILY_FOLLOW_UPS: &[&str] = &[
    "क्या आप इस स्थिति में किसी विश्वसनीय व्यक्ति से बात कर सकते हैं? / Can you talk to someone you trust about this situation?",
];

const CELEBRATION_FOLLOW_UPS: &[&str] = &[
    "इन सकारात्मक भावनाओं में सबसे ज्यादा योगदान किस बात का है? / What's contributing most to these positive feelings?",
];

const ANXIETY_FOLLOW_UPS: &[&str] = &[
    "क्या आप मेरे साथ एक सरल सांस लेने का अभ्यास करना चाहेंगे? / Would you like to try a simple breathing exercise together?",
];

const REFLECTION_PROMPTS: &[&str] = &[
    "आज आपको आराम देने वाली एक छोटी सी बात क्या है?",
    "What's one small thing that brought you comfort today?",
    "क्या आप किसी ऐसे समय के बारे में सोच सकते हैं जब आपने इसी तरह की चुनौती पर काबू पाया था?",
    "Can you think of a time when you overcame a similar challenge?",
    "यदि कोई मित्र आपकी तरह महसूस कर रहा हो तो आप उसे क्या कहेंगे?",
    "What would you tell a friend who was feeling the same way?",
    "अभी आप तीन चीजों के लिए आभारी हैं, भले ही वे छोटी हों?",
    "What are three things you're grateful for right now, even if they're small?",
    "आप अपने साथ वैसी ही दयालुता कैसे दिखा सकते हैं जैसी आप एक अच्छे मित्र के साथ दिखाते हैं?",
    "How might you show yourself the same kindness you'd show a good friend?",
];

const NEUTRAL_FOLLOW_UPS: &[&str] = &[
    "आप अभी कैसा महसूस कर रहे हैं? मैं आपके मन की बात को और समझना चाहूंगा। / How are you feeling right now? I'd like to understand more about what's on your mind.",
];

const CRISIS_TEMPLATES: &[&str] = &[
    "मुझे आपकी बात से बहुत चिंता हो रही है। आपका जीवन मूल्यवान और अर्थपूर्ण है। कृपया तुरंत किसी क्राइसिस हेल्पलाइन से संपर्क करें - वहां प्रशिक्षित पेशेवर हैं जो अभी आपकी मदद कर सकते हैं।",
    "I'm very concerned about what you're sharing. Your life has value and meaning. Please reach out to Kiran Mental Health Helpline at 1800-599-0019 immediately.",
    "आप जो महसूस कर रहे हैं वह अस्थायी है, भले ही ऐसा न लगे। कृपया तुरंत किसी मानसिक स्वास्थ्य पेशेवर या क्राइसिस सेवा से संपर्क करें।",
    "What you're feeling is temporary, even though it might not feel that way. Please contact a mental health professional or crisis service immediately for support.",
];

const CRISIS_RESOURCES: &[&str] = &[
    "Kiran Mental Health Helpline: 1800-599-0019",
    "Vandrevala Foundation: 9999-666-555",
    "Aasra Mumbai: 022-2754-6669",
];

const DAILY_PROMPTS: &[&str] = &[
    "आज आप किस बात के लिए आभारी हैं? / What's one thing you're grateful for today?",
    "आज आपने अपने या दूसरों के साथ कैसे दयालुता दिखाई? / How did you show kindness to yourself or others today?",
    "आज आपको किस चीज़ ने चुनौती दी, और आपने इसे कैसे संभाला? / What challenged you today, and how did you handle it?",
    "आज की एक छोटी जीत जिसका आप जश्न मना सकते हैं? / What's one small victory you can celebrate from today?",
    "आप अभी कैसा महसूस कर रहे हैं, और आपको क्या चाहिए? / How are you feeling right now, and what do you need?",
    "हाल ही में किस बात ने आपको मुस्कुराने पर मजबूर किया? / What's something that made you smile recently?",
    "आज की किस बात को आप छोड़ना चाहेंगे? / What would you like to let go of from today?",
    "कल आप अपने साथ कैसे नरम हो सकते हैं? / How can you be gentle with yourself tomorrow?",
    "आज आपने अपने बारे में क्या सीखा? / What's one thing you learned about yourself today?",
    "आप किस बात का इंतज़ार कर रहे हैं? / What are you looking forward to?",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub lead: &'static str,
    pub fragments: &'static [&'static str],
    pub tail: &'static str,
}

impl Template {
    const fn new(
        lead: &'static str,
        fragments: &'static [&'static str],
        tail: &'static str,
    ) -> Self {
        Self {
            lead,
            fragments,
            tail,
        }
    }

    /// Joins the non-empty parts with single spaces.
    pub fn render(&self, fragment: &str) -> String {
        [self.lead, fragment, self.tail]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankEntry {
    pub templates: Vec<Template>,
    pub follow_ups: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBank {
    pub family_pressure: BankEntry,
    pub positive: BankEntry,
    pub anxiety: BankEntry,
    pub depression: BankEntry,
    pub neutral: BankEntry,
    pub crisis_templates: &'static [&'static str],
    pub crisis_resources: &'static [&'static str],
    pub daily_prompts: &'static [&'static str],
}

impl ResponseBank {
    /// Entry for a non-crisis category. `Crisis` has no entry.
    pub fn entry(&self, category: ReplyCategory) -> Option<&BankEntry> {
        match category {
            ReplyCategory::Crisis => None,
            ReplyCategory::FamilyPressure => Some(&self.family_pressure),
            ReplyCategory::Positive => Some(&self.positive),
            ReplyCategory::Anxiety => Some(&self.anxiety),
            ReplyCategory::Depression => Some(&self.depression),
            ReplyCategory::Neutral => Some(&self.neutral),
        }
    }
}

impl Default for ResponseBank {
    fn default() -> Self {
        Self {
            family_pressure: BankEntry {
                // every cultural lead pairs with the same fragment pool
                templates: CULTURAL_LEADS
                    .iter()
                    .copied()
                    .map(|lead| Template::new(lead, FAMILY_FRAGMENTS, ""))
                    .collect(),
                follow_ups: FAMILY_FOLLOW_UPS,
            },
            positive: BankEntry {
                templates: vec![Template::new(
                    "यह सुनकर बहुत अच्छा लगा! मैं खुश हूं कि आप सकारात्मक भावनाओं का अनुभव कर रहे हैं।",
                    CELEBRATION_FRAGMENTS,
                    "",
                )],
                follow_ups: CELEBRATION_FOLLOW_UPS,
            },
            anxiety: BankEntry {
                templates: vec![Template::new(
                    "मैं समझता हूं कि आप अभी चिंतित महसूस कर रहे हैं।",
                    SUPPORTIVE,
                    "जब हम चिंतित होते हैं, तो सांस लेने और ग्राउंडिंग तकनीकों पर ध्यान देना मददगार हो सकता है।",
                )],
                follow_ups: ANXIETY_FOLLOW_UPS,
            },
            depression: BankEntry {
                templates: vec![Template::new(
                    "मैं समझता हूं कि आप एक कठिन समय से गुजर रहे हैं।",
                    SUPPORTIVE,
                    "अवसाद भारी लग सकता है, लेकिन मदद मांगकर आपने एक महत्वपूर्ण कदम उठाया है।",
                )],
                follow_ups: REFLECTION_PROMPTS,
            },
            neutral: BankEntry {
                templates: vec![Template::new(
                    "",
                    SUPPORTIVE,
                    "मैं यहां आपकी बात सुनने और आपका साथ देने के लिए हूं।",
                )],
                follow_ups: NEUTRAL_FOLLOW_UPS,
            },
            crisis_templates: CRISIS_TEMPLATES,
            crisis_resources: CRISIS_RESOURCES,
            daily_prompts: DAILY_PROMPTS,
        }
    }
}
