//! Mock symptom classifier.
//!
//! Stands in for a language model with an ordered table of keyword rules. The
//! input is lowercased once and each rule's trigger is tested against it in
//! table order; the first rule that matches supplies the conditions and next
//! steps. The final rule always matches, so classification never fails.
//!
//! New rules go into `RULES` ahead of `GENERAL`.

/// Keyword test a rule applies to the lowercased symptom text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Every keyword must appear.
    AllOf(&'static [&'static str]),
    /// At least one keyword must appear.
    AnyOf(&'static [&'static str]),
    /// Matches any text.
    Always,
}

impl Trigger {
    /// `text` must already be lowercased; keywords are stored lowercase.
    fn matches(&self, text: &str) -> bool {
        match self {
            Trigger::AllOf(keywords) => keywords.iter().all(|k| text.contains(k)),
            Trigger::AnyOf(keywords) => keywords.iter().any(|k| text.contains(k)),
            Trigger::Always => true,
        }
    }
}

/// A canned response and the trigger that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub conditions: &'static [&'static str],
    pub steps: &'static [&'static str],
}

const HEADACHE_STIFF_NECK: Rule = Rule {
    name: "headache_stiff_neck",
    trigger: Trigger::AllOf(&["headache", "stiff neck"]),
    conditions: &["Tension Headache", "Severe Migraine", "Neck Strain"],
    steps: &[
        "Rest in a dark, quiet room.",
        "Apply a cold or warm compress to the neck.",
        "If symptoms are severe or come with fever, **seek emergency medical attention immediately.**",
    ],
};

const RESPIRATORY: Rule = Rule {
    name: "respiratory",
    trigger: Trigger::AnyOf(&["fever", "cough"]),
    conditions: &[
        "Common Cold (Viral Infection)",
        "Flu (Influenza)",
        "Minor Bronchitis",
    ],
    steps: &[
        "Isolate, rest, and drink plenty of fluids.",
        "Monitor temperature regularly.",
        "Consult a doctor if breathing is difficult or fever lasts longer than 72 hours.",
    ],
};

const GENERAL: Rule = Rule {
    name: "general",
    trigger: Trigger::Always,
    conditions: &[
        "Stress/Fatigue",
        "Dehydration",
        "Mild Musculoskeletal Strain",
    ],
    steps: &[
        "Monitor symptoms closely.",
        "Ensure adequate rest and hydration.",
        "Contact a primary care physician if symptoms are concerning or rapidly changing.",
    ],
};

const RULES: &[Rule] = &[HEADACHE_STIFF_NECK, RESPIRATORY, GENERAL];

/// Rules in evaluation order. The last entry is the catch-all fallback.
pub fn rules() -> &'static [Rule] {
    RULES
}

/// Outcome of classifying a symptom description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Name of the rule that matched.
    pub rule: &'static str,
    pub conditions: &'static [&'static str],
    pub steps: &'static [&'static str],
}

impl From<&Rule> for Classification {
    fn from(rule: &Rule) -> Self {
        Self {
            rule: rule.name,
            conditions: rule.conditions,
            steps: rule.steps,
        }
    }
}

/// Classifies free-text symptoms against the rule table.
///
/// Matching is a case-insensitive substring check. Inputs are not validated
/// here; see [`crate::validation::validate_symptom_description`].
pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();
    let rule = RULES
        .iter()
        .find(|rule| rule.trigger.matches(&lowered))
        .unwrap_or(&GENERAL);

    Classification::from(rule)
}
