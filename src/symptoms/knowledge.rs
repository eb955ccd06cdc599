//! Fixed symptom-group → condition table.

/// A candidate condition with its unadjusted likelihood (0–100).
#[derive(Debug)]
pub struct Condition {
    pub name: &'static str,
    pub base_probability: u8,
    pub advice: &'static str,
}

/// Trigger terms and the conditions they point to.
#[derive(Debug)]
pub struct ConditionGroupRecord {
    pub symptom_keywords: &'static [&'static str],
    pub conditions: &'static [Condition],
}

pub static CONDITION_GROUPS: &[ConditionGroupRecord] = &[
    ConditionGroupRecord {
        symptom_keywords: &["headache", "head", "fever", "fatigue"],
        conditions: &[
            Condition {
                name: "Common Cold",
                base_probability: 70,
                advice: "Rest, stay hydrated, and take over-the-counter pain relievers if needed. Contact a healthcare provider if symptoms worsen or persist beyond a week.",
            },
            Condition {
                name: "Flu",
                base_probability: 60,
                advice: "Rest, stay hydrated, and monitor your temperature. Consider over-the-counter flu medications. Contact a healthcare provider if symptoms are severe or you have underlying health conditions.",
            },
            Condition {
                name: "Migraine",
                base_probability: 40,
                advice: "Rest in a quiet, dark room. Try over-the-counter pain medications. If migraines are recurring, consult a healthcare provider for preventive treatments.",
            },
        ],
    },
    ConditionGroupRecord {
        symptom_keywords: &["cough", "chest", "chest pain", "shortness of breath", "breathing difficulty"],
        conditions: &[
            Condition {
                name: "Bronchitis",
                base_probability: 65,
                advice: "Rest, stay hydrated, and use a humidifier to ease breathing. Avoid smoking or secondhand smoke. Consult a healthcare provider if symptoms worsen or persist.",
            },
            Condition {
                name: "Common Cold",
                base_probability: 60,
                advice: "Rest, stay hydrated, and consider over-the-counter cough medications. Use honey (if over 1 year old) to soothe throat. Contact a healthcare provider if symptoms persist beyond 10 days.",
            },
            Condition {
                name: "Asthma",
                base_probability: 45,
                advice: "Use a prescribed inhaler if available. Sit upright to facilitate breathing. Seek immediate medical attention if having severe difficulty breathing or symptoms don't improve quickly with medication.",
            },
        ],
    },
    ConditionGroupRecord {
        symptom_keywords: &["stomach", "stomach pain", "nausea", "vomiting", "diarrhea"],
        conditions: &[
            Condition {
                name: "Gastroenteritis",
                base_probability: 75,
                advice: "Stay hydrated with small sips of clear fluids. Rest and avoid solid foods until vomiting stops. Gradually reintroduce bland foods. Seek medical attention if unable to keep fluids down or symptoms are severe.",
            },
            Condition {
                name: "Food Poisoning",
                base_probability: 65,
                advice: "Stay hydrated and rest. Avoid solid foods until symptoms improve, then gradually reintroduce bland foods. Seek medical attention if symptoms are severe or persist beyond 48 hours.",
            },
            Condition {
                name: "Irritable Bowel Syndrome",
                base_probability: 40,
                advice: "Try to identify and avoid trigger foods. Manage stress through relaxation techniques. Consider over-the-counter antidiarrheal medications if appropriate. Consult a healthcare provider for chronic symptoms.",
            },
        ],
    },
    ConditionGroupRecord {
        symptom_keywords: &["rash", "skin", "itching", "swelling"],
        conditions: &[
            Condition {
                name: "Contact Dermatitis",
                base_probability: 70,
                advice: "Avoid the suspected irritant. Apply cool, wet compresses and consider over-the-counter hydrocortisone cream. Take an antihistamine for itching if needed. Seek medical attention if the rash is severe or spreads.",
            },
            Condition {
                name: "Eczema",
                base_probability: 55,
                advice: "Keep skin moisturized with fragrance-free lotions. Avoid hot water and harsh soaps. Consider over-the-counter hydrocortisone cream for flare-ups. Consult a healthcare provider for recurring or severe symptoms.",
            },
            Condition {
                name: "Allergic Reaction",
                base_probability: 50,
                advice: "Take an antihistamine if available. Apply cool compresses to affected areas. Seek immediate medical attention if experiencing difficulty breathing, throat tightness, or severe swelling.",
            },
        ],
    },
    ConditionGroupRecord {
        symptom_keywords: &["sore throat", "throat", "difficulty swallowing"],
        conditions: &[
            Condition {
                name: "Strep Throat",
                base_probability: 65,
                advice: "Rest and stay hydrated. Gargle with warm salt water. Consider over-the-counter pain relievers. Consult a healthcare provider as antibiotics may be needed if caused by streptococcal bacteria.",
            },
            Condition {
                name: "Common Cold",
                base_probability: 60,
                advice: "Rest, stay hydrated, and use throat lozenges for temporary relief. Try warm liquids like tea with honey. Seek medical attention if symptoms worsen or persist beyond a week.",
            },
            Condition {
                name: "Tonsillitis",
                base_probability: 55,
                advice: "Rest and stay hydrated. Use warm salt water gargles and over-the-counter pain relievers. Consult a healthcare provider if you have a high fever, severe symptoms, or difficulty breathing or swallowing.",
            },
        ],
    },
];
