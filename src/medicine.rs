//! Plain-language medication instructions.
//!
//! Turns a structured prescription (dose, frequency, timing, label
//! warnings) into one or two short sentences a patient can follow.

use serde::{Deserialize, Serialize};

/// When in the day, or relative to meals, a dose is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Timing {
    Morning,
    Afternoon,
    Evening,
    BeforeMeal,
    WithMeal,
    AfterMeal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    /// "daily", "twice daily", ... or free text.
    pub frequency: String,
    pub timing: Vec<Timing>,
    /// Label warnings, e.g. "Take with water", "Avoid alcohol".
    pub special_instructions: Vec<String>,
}

impl Medication {
    fn has_timing(&self, timing: Timing) -> bool {
        self.timing.contains(&timing)
    }

    fn has_instruction(&self, instruction: &str) -> bool {
        self.special_instructions.iter().any(|s| s == instruction)
    }
}

fn frequency_phrase(frequency: &str) -> &str {
    match frequency {
        "daily" => "once a day",
        "twice daily" => "twice a day",
        "three times daily" => "three times a day",
        "four times daily" => "four times a day",
        "as needed" => "only when you need it",
        other => other,
    }
}

/// Build the simplified instruction text for `medication`.
pub fn simplify_instructions(medication: &Medication) -> String {
    let mut text = format!(
        "Take {} of {} {}",
        medication.dosage,
        medication.name,
        frequency_phrase(&medication.frequency)
    );

    let day_parts: Vec<&str> = [
        (Timing::Morning, "in the morning"),
        (Timing::Afternoon, "in the afternoon"),
        (Timing::Evening, "in the evening"),
    ]
    .into_iter()
    .filter(|(timing, _)| medication.has_timing(*timing))
    .map(|(_, phrase)| phrase)
    .collect();

    if !day_parts.is_empty() {
        text.push(' ');
        text.push_str(&day_parts.join(" and "));
    }

    if medication.has_timing(Timing::BeforeMeal) {
        text.push_str(", about 30 minutes before eating");
    } else if medication.has_timing(Timing::WithMeal) {
        text.push_str(", with your food");
    } else if medication.has_timing(Timing::AfterMeal) {
        text.push_str(", after you finish eating");
    }

    text.push('.');

    let mut warnings: Vec<&str> = Vec::new();
    if medication.has_instruction("Take with water") {
        warnings.push("Always take with a full glass of water");
    }
    if medication.has_instruction("Take with food") && !medication.has_timing(Timing::WithMeal) {
        warnings.push("Take with food to avoid stomach upset");
    }
    if medication.has_instruction("Take on an empty stomach")
        && !medication.has_timing(Timing::BeforeMeal)
    {
        warnings.push("Take on an empty stomach");
    }
    if medication.has_instruction("May cause drowsiness") {
        warnings.push("This medicine may make you sleepy. Do not drive or use machinery after taking it");
    }
    if medication.has_instruction("Avoid alcohol") {
        warnings.push("Do not drink alcohol while taking this medicine");
    }

    if !warnings.is_empty() {
        text.push(' ');
        text.push_str(&warnings.join(". "));
        text.push('.');
    }

    text
}
