//! Curated medication knowledge base.
//!
//! Deterministic first stage of the reply pipeline: a pure function of the
//! message text. Rules are checked in declaration order and the first match
//! wins, so more specific rules must be listed before broader ones.

use tracing::debug;

use crate::domain::models::{KnowledgeRule, RuleSet};

/// Matches messages against the ordered knowledge rules.
#[derive(Debug, Clone)]
pub struct KnowledgeMatcher {
    rules: RuleSet,
}

impl Default for KnowledgeMatcher {
    fn default() -> Self {
        Self::new(builtin_rules())
    }
}

impl KnowledgeMatcher {
    pub fn new(rules: impl Into<RuleSet>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Canned answer for `message`, or `None` if no rule matches.
    pub fn find_match(&self, message: &str) -> Option<String> {
        let answer = self.rules.first_match(message).map(str::to_string);
        debug!(matched = answer.is_some(), "knowledge base lookup");
        answer
    }
}

/// The builtin knowledge base.
pub fn builtin_rules() -> Vec<KnowledgeRule> {
    vec![
        KnowledgeRule::new(
            ["aspirin"],
            "Aspirin is commonly used for pain, fever and, at low doses, to help prevent blood clots. \
             Typical adult pain-relief doses are 300-600 mg every 4-6 hours, not exceeding 4 g per day. \
             Take it with food to reduce stomach irritation. Aspirin should not be given to children \
             under 16, and people with stomach ulcers, bleeding disorders or who take blood thinners \
             should check with their doctor first. Please consult your healthcare provider before \
             starting or changing any medication.",
        ),
        KnowledgeRule::new(
            ["ibuprofen", "advil", "motrin", "nurofen"],
            "Ibuprofen is an anti-inflammatory pain reliever. The usual adult dose is 200-400 mg \
             every 4-6 hours as needed, with no more than 1,200 mg per day without medical advice. \
             Take it with food or milk, and avoid it if you have stomach ulcers, kidney problems or \
             are in late pregnancy. Please consult your healthcare provider before starting or \
             changing any medication.",
        ),
        KnowledgeRule::new(
            ["acetaminophen", "paracetamol", "tylenol"],
            "Acetaminophen (paracetamol) relieves pain and fever. The usual adult dose is 500-1,000 mg \
             every 4-6 hours, with a maximum of 4,000 mg in 24 hours (lower if you drink alcohol \
             regularly or have liver problems). Many cold and flu products also contain it, so check \
             labels to avoid taking a double dose. Please consult your healthcare provider before \
             starting or changing any medication.",
        ),
        KnowledgeRule::new(
            ["vitamin d"],
            "Vitamin D supports bone health and immune function. Most adults need 600-800 IU per day, \
             and it is best absorbed with a meal that contains some fat. Very high doses over a long \
             time can be harmful, so have your levels checked before taking more than 4,000 IU daily. \
             Please consult your healthcare provider before starting any supplement.",
        ),
        KnowledgeRule::new(
            ["vitamin c"],
            "Vitamin C is an antioxidant found in citrus fruits, peppers and berries. Adults need about \
             75-90 mg per day; doses above 2,000 mg can cause stomach upset. It can be taken at any time \
             of day, with or without food. Please consult your healthcare provider before starting any \
             supplement.",
        ),
        KnowledgeRule::new(
            ["missed dose", "missed a dose", "missed my", "forgot to take", "forgot my"],
            "If you miss a dose, take it as soon as you remember, unless it is almost time for your next \
             dose. In that case skip the missed dose and continue your regular schedule. Never take a \
             double dose to make up for a missed one. Setting a reminder in your medication schedule can \
             help. Check your medication leaflet or ask your pharmacist for drug-specific advice.",
        ),
        KnowledgeRule::new(
            ["side effect", "side-effect", "adverse reaction", "allergic reaction"],
            "Side effects vary by medication and person. Common ones include nausea, drowsiness, headache \
             and dizziness. Seek medical help immediately if you notice difficulty breathing, swelling of \
             the face or throat, a severe rash or chest pain. Keep a note of any side effects and discuss \
             them with your healthcare provider.",
        ),
        KnowledgeRule::new(
            ["interaction", "interact", "take together", "mix with", "combine"],
            "Some medications interact with each other, with supplements or with certain foods. Always \
             tell your doctor and pharmacist about everything you take, including over-the-counter \
             medicines and herbal products. Your pharmacist can check your list for interactions.",
        ),
        KnowledgeRule::new(
            ["alcohol", "drink", "beer", "wine"],
            "Alcohol can interact with many medications, including pain relievers, antibiotics, sleep aids \
             and antidepressants, increasing side effects or reducing effectiveness. Check the label or \
             ask your pharmacist whether it is safe to drink while taking your medication.",
        ),
        KnowledgeRule::new(
            ["pregnan", "breastfeed", "breast feed"],
            "Many medicines can affect a pregnancy or pass into breast milk. Do not start, stop or change \
             any medication while pregnant or breastfeeding without talking to your doctor or midwife \
             first.",
        ),
        KnowledgeRule::new(
            ["antibiotic", "amoxicillin"],
            "Take antibiotics exactly as prescribed and finish the full course, even if you feel better \
             sooner. Stopping early can let the infection return and contributes to antibiotic resistance. \
             Antibiotics do not work against viral infections such as colds or flu.",
        ),
        KnowledgeRule::new(
            ["store", "storage", "expired", "expiry", "expiration"],
            "Store most medications at room temperature in a dry place away from direct sunlight; the \
             bathroom is usually too humid. Keep them out of reach of children. Do not use medicines past \
             their expiry date, and return unused medicines to a pharmacy for safe disposal.",
        ),
        KnowledgeRule::new(
            ["reminder", "schedule", "add a medication", "add medication", "track"],
            "You can add each medication with its dosage and the times you take it from the medication \
             dashboard. Mark a dose as taken when you take it, and review past doses in your medication \
             history. You can also export your history as a PDF report to share with your doctor.",
        ),
    ]
}
