//! Last-resort conversational replies.
//!
//! Used only when neither the knowledge base nor the model cascade produced
//! an answer. Always returns something: if no rule matches, the default
//! reply asks the user to be more specific.

use tracing::debug;

use crate::domain::models::{ContextualRule, RuleSet};

const CAPABILITIES: &str = "I can answer questions about common medications, dosages, missed doses, \
    side effects, interactions and how to use your medication schedule.";

pub const GREETING_REPLY: &str = "Hello! I'm your AI health assistant. I can answer questions about \
    common medications, dosages, missed doses, side effects, interactions and how to use your \
    medication schedule. What would you like to know?";

pub const DEFAULT_REPLY: &str = "I'm not sure I understood that. Could you be more specific? For \
    example, ask about a medication by name, what to do after a missed dose, or possible side effects. \
    For personal medical advice, please consult your healthcare provider.";

/// Resolves a reply from the ordered contextual rules.
#[derive(Debug, Clone)]
pub struct ContextualFallback {
    rules: RuleSet,
    default_reply: String,
}

impl Default for ContextualFallback {
    fn default() -> Self {
        Self::new(builtin_rules(), DEFAULT_REPLY)
    }
}

impl ContextualFallback {
    pub fn new(rules: impl Into<RuleSet>, default_reply: impl Into<String>) -> Self {
        Self {
            rules: rules.into(),
            default_reply: default_reply.into(),
        }
    }

    pub fn fallback(&self, message: &str) -> String {
        match self.rules.first_match(message) {
            Some(reply) => {
                debug!("contextual rule matched");
                reply.to_string()
            }
            None => {
                debug!("no contextual rule matched, using default reply");
                self.default_reply.clone()
            }
        }
    }
}

/// Greetings, "how are you", gratitude, then help requests.
pub fn builtin_rules() -> Vec<ContextualRule> {
    vec![
        ContextualRule::new(
            [
                " hello ",
                " hi ",
                " hey ",
                " hiya ",
                "good morning",
                "good afternoon",
                "good evening",
                "greetings",
            ],
            GREETING_REPLY,
        ),
        ContextualRule::new(
            ["how are you", "how're you", "how are u", "how r u"],
            format!(
                "I'm doing well, thank you for asking! I'm here and ready to help. {CAPABILITIES} \
                 What can I help you with today?"
            ),
        ),
        ContextualRule::new(
            [" thank", " thx ", " ty ", "appreciate"],
            "You're welcome! I'm glad I could help. Remember to take your medications as prescribed, \
             and reach out to your healthcare provider if anything changes or worries you.",
        ),
        ContextualRule::new(
            [" help ", "what can you do", "what do you do", "capabilit", "features"],
            format!(
                "Here is what I can help with:\n\
                 - Information about common medications such as aspirin, ibuprofen and acetaminophen\n\
                 - Vitamins and supplements\n\
                 - What to do after a missed dose\n\
                 - Side effects and drug interactions\n\
                 - Storing medicines safely\n\
                 - Using your medication schedule and history\n\
                 {CAPABILITIES} Just ask!"
            ),
        ),
    ]
}
