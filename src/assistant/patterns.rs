//! Fixed conversation patterns for the rule-based assistant.

use serde::{Deserialize, Serialize};

/// Topic a conversation pattern answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternCategory {
    Greeting,
    Pain,
    Mobility,
    Vision,
    Hearing,
    MentalHealth,
    Medication,
    Exercise,
    Emergency,
    GeneralHealth,
    Rights,
    Gratitude,
    Goodbye,
}

impl PatternCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Pain => "pain",
            Self::Mobility => "mobility",
            Self::Vision => "vision",
            Self::Hearing => "hearing",
            Self::MentalHealth => "mental-health",
            Self::Medication => "medication",
            Self::Exercise => "exercise",
            Self::Emergency => "emergency",
            Self::GeneralHealth => "general-health",
            Self::Rights => "rights",
            Self::Gratitude => "gratitude",
            Self::Goodbye => "goodbye",
        }
    }
}

/// Keywords that trigger a topic and the canned replies for it.
#[derive(Debug)]
pub struct ConversationPatternRecord {
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
    pub category: PatternCategory,
}

/// Patterns in ranking order; earlier patterns win ties.
pub static CONVERSATION_PATTERNS: &[ConversationPatternRecord] = &[
    ConversationPatternRecord {
        keywords: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        responses: &[
            "Hello! I'm your AI health assistant. How can I help you today?",
            "Hi there! I'm here to help with your health questions. What would you like to know?",
            "Good day! I'm ready to assist you with health-related questions. How may I help?",
        ],
        category: PatternCategory::Greeting,
    },
    ConversationPatternRecord {
        keywords: &["pain", "hurt", "ache", "sore", "chronic pain", "headache", "back pain"],
        responses: &[
            "I understand you're experiencing pain. Pain management is important for quality of life. Consider keeping a pain diary to track patterns and triggers. For chronic pain, work with your healthcare team to develop a comprehensive management plan that may include medication, therapy, and lifestyle changes.",
            "Pain can significantly impact daily activities. Some general strategies include gentle exercise as tolerated, stress management, proper sleep, and working with healthcare professionals. If pain is severe or persistent, please consult with a doctor.",
            "Managing pain effectively often requires a multi-faceted approach. This might include physical therapy, occupational therapy, medication management, and sometimes psychological support. Don't hesitate to seek professional help.",
        ],
        category: PatternCategory::Pain,
    },
    ConversationPatternRecord {
        keywords: &["wheelchair", "mobility", "walking", "movement", "paralyzed", "spinal cord"],
        responses: &[
            "Mobility challenges can be addressed in many ways. Working with physical and occupational therapists can help optimize your mobility and independence. There are many assistive devices and home modifications that can help.",
            "For wheelchair users, it's important to focus on pressure relief, proper positioning, and maintaining upper body strength. Regular skin checks and proper cushioning are essential for preventing pressure sores.",
            "Mobility limitations don't have to limit your independence. There are many adaptive techniques, assistive technologies, and community resources available to help you maintain an active lifestyle.",
        ],
        category: PatternCategory::Mobility,
    },
    ConversationPatternRecord {
        keywords: &["vision", "blind", "sight", "see", "eyes", "visual", "low vision"],
        responses: &[
            "Vision changes can be concerning. Regular eye exams are important for everyone. If you're experiencing sudden vision changes, this should be evaluated promptly by an eye care professional.",
            "There are many assistive technologies available for people with vision impairments, including screen readers, magnification software, and smartphone apps designed for accessibility.",
            "Living with vision loss can be challenging, but there are many resources and strategies available. Organizations like the National Federation of the Blind offer excellent support and training programs.",
        ],
        category: PatternCategory::Vision,
    },
    ConversationPatternRecord {
        keywords: &["hearing", "deaf", "ear", "sound", "hearing aid", "tinnitus"],
        responses: &[
            "Hearing health is important for communication and safety. If you're experiencing hearing changes, consider seeing an audiologist for a comprehensive evaluation.",
            "Modern hearing aids are much more advanced and discreet than older models. There are also many assistive listening devices available for different situations.",
            "Communication strategies can be very helpful for people with hearing loss. This might include lip reading, sign language, or using visual cues and written communication.",
        ],
        category: PatternCategory::Hearing,
    },
    ConversationPatternRecord {
        keywords: &["depression", "anxiety", "stress", "mental health", "sad", "worried", "counseling"],
        responses: &[
            "Mental health is just as important as physical health. It's completely normal and healthy to seek mental health support when you need it.",
            "People with disabilities may face additional stressors, and it's important to address mental health concerns. Look for therapists who have experience working with people with disabilities.",
            "Support groups, both in-person and online, can be very helpful for mental health. Don't ignore signs of depression or anxiety - they are treatable conditions.",
        ],
        category: PatternCategory::MentalHealth,
    },
    ConversationPatternRecord {
        keywords: &["medication", "medicine", "prescription", "pills", "drugs", "side effects"],
        responses: &[
            "Managing medications safely is crucial. Always take medications exactly as prescribed and don't stop without consulting your doctor. Use pill organizers or apps to help stay organized.",
            "If you're experiencing side effects from medications, don't stop taking them without talking to your healthcare provider first. They may be able to adjust the dose or switch to a different medication.",
            "Keep an updated list of all your medications, including over-the-counter drugs and supplements. This is important information to share with all your healthcare providers.",
        ],
        category: PatternCategory::Medication,
    },
    ConversationPatternRecord {
        keywords: &["exercise", "fitness", "workout", "physical activity", "gym", "sports"],
        responses: &[
            "Regular physical activity is beneficial for everyone, including people with disabilities. The key is finding activities that work for your specific abilities and limitations.",
            "Consider working with a physical therapist or adaptive fitness specialist who can design a safe, effective exercise program tailored to your needs.",
            "Many gyms and community centers offer adaptive fitness programs. Swimming, chair exercises, and adaptive sports are great options for many people with disabilities.",
        ],
        category: PatternCategory::Exercise,
    },
    ConversationPatternRecord {
        keywords: &["emergency", "urgent", "serious", "hospital", "911", "ambulance"],
        responses: &[
            "If this is a medical emergency, please call 911 or your local emergency number immediately. Don't delay seeking emergency care.",
            "For urgent medical concerns, contact your healthcare provider right away or go to the nearest emergency room. Your safety is the top priority.",
            "I'm not able to handle medical emergencies. Please seek immediate professional medical help if you're experiencing a serious health issue.",
        ],
        category: PatternCategory::Emergency,
    },
    ConversationPatternRecord {
        keywords: &["health", "doctor", "medical", "symptoms", "treatment", "diagnosis"],
        responses: &[
            "For specific medical questions, it's always best to consult with your healthcare provider who can evaluate your individual situation and provide personalized advice.",
            "I can provide general health information, but I cannot diagnose conditions or recommend specific treatments. Please work with qualified healthcare professionals for medical decisions.",
            "Maintaining good health involves regular check-ups, following medical advice, staying active as able, eating well, and managing stress. Your healthcare team can help you develop a plan that works for you.",
        ],
        category: PatternCategory::GeneralHealth,
    },
    ConversationPatternRecord {
        keywords: &["accessibility", "rights", "discrimination", "accommodation", "ADA", "workplace"],
        responses: &[
            "You have rights under the Americans with Disabilities Act (ADA) to reasonable accommodations in employment, public accommodations, and other areas. Don't hesitate to advocate for yourself.",
            "Workplace accommodations might include modified schedules, assistive technology, accessible workspaces, or job restructuring. Start by discussing your needs with HR or your supervisor.",
            "If you face discrimination, document everything and consider contacting the Equal Employment Opportunity Commission (EEOC) or other appropriate agencies for help.",
        ],
        category: PatternCategory::Rights,
    },
    ConversationPatternRecord {
        keywords: &["thank you", "thanks", "appreciate", "helpful", "good", "great"],
        responses: &[
            "You're very welcome! I'm glad I could help. Remember, I'm here whenever you have questions about health and disability topics.",
            "I'm happy to help! Don't hesitate to ask if you have more questions. Your health and well-being are important.",
            "Thank you for the kind words! I'm here to support you with health information and resources whenever you need them.",
        ],
        category: PatternCategory::Gratitude,
    },
    ConversationPatternRecord {
        keywords: &["goodbye", "bye", "see you", "talk later", "farewell"],
        responses: &[
            "Goodbye! Take care of yourself, and remember that I'm here if you need health information or support in the future.",
            "Take care! Remember to prioritize your health and don't hesitate to reach out to healthcare professionals when needed.",
            "Farewell! Wishing you good health and wellness. I'm always here if you need assistance with health-related questions.",
        ],
        category: PatternCategory::Goodbye,
    },
];
