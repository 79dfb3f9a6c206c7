//! Ordered keyword rules shared by the knowledge base and the contextual
//! fallback.
//!
//! A rule matches when any of its triggers occurs as a substring of the
//! normalized message. Rule order is significant: the first matching rule wins.

/// A keyword rule mapping trigger substrings to a canned response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeRule {
    pub triggers: Vec<String>,
    pub response: String,
}

/// Contextual rules have the same shape; they are evaluated last.
pub type ContextualRule = KnowledgeRule;

impl KnowledgeRule {
    pub fn new<I, S>(triggers: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }

    /// `normalized` must come from [`normalize_message`].
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| normalized.contains(trigger.as_str()))
    }
}

/// An immutable, ordered list of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<KnowledgeRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<KnowledgeRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[KnowledgeRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Response of the earliest rule matching `message`, if any.
    pub fn first_match(&self, message: &str) -> Option<&str> {
        let normalized = normalize_message(message);
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.response.as_str())
    }
}

impl From<Vec<KnowledgeRule>> for RuleSet {
    fn from(rules: Vec<KnowledgeRule>) -> Self {
        Self::new(rules)
    }
}

/// Lower-case the message, turn punctuation into spaces (apostrophes are
/// kept), collapse whitespace and pad with a single space on each side.
///
/// The padding lets a trigger such as `" hi "` match the word "hi" without
/// also matching "this" or "which".
///
/// ```
/// use medchat::domain::models::rules::normalize_message;
///
/// assert_eq!(normalize_message("Hi!  What's up?"), " hi what's up ");
/// ```
pub fn normalize_message(message: &str) -> String {
    let lowered: String = message
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut normalized = String::with_capacity(lowered.len() + 2);
    normalized.push(' ');
    for word in lowered.split_whitespace() {
        normalized.push_str(word);
        normalized.push(' ');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitamins() -> RuleSet {
        RuleSet::new(vec![
            KnowledgeRule::new(["vitamin d"], "D"),
            KnowledgeRule::new(["vitamin c"], "C"),
        ])
    }

    #[test]
    fn test_normalize_message() {
        assert_eq!(normalize_message(""), " ");
        assert_eq!(normalize_message("ASPIRIN"), " aspirin ");
        assert_eq!(
            normalize_message("  Vitamin-D,\tor vitamin C?"),
            " vitamin d or vitamin c "
        );
        assert_eq!(normalize_message("I'm fine"), " i'm fine ");
    }

    #[test]
    fn test_earliest_rule_wins() {
        let rules = vitamins();
        assert_eq!(
            rules.first_match("Should I take vitamin C or vitamin D?"),
            Some("D")
        );
        assert_eq!(rules.first_match("vitamin c please"), Some("C"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(vitamins().first_match("magnesium"), None);
        assert_eq!(RuleSet::default().first_match("anything"), None);
    }

    #[test]
    fn test_word_bounded_trigger() {
        let rules = RuleSet::new(vec![KnowledgeRule::new([" hi "], "greeting")]);
        assert_eq!(rules.first_match("Hi!"), Some("greeting"));
        assert_eq!(rules.first_match("oh hi there"), Some("greeting"));
        assert_eq!(rules.first_match("which one is this"), None);
    }

    #[test]
    fn test_any_trigger_matches() {
        let rule = KnowledgeRule::new(["tylenol", "acetaminophen", "paracetamol"], "A");
        assert!(rule.matches(&normalize_message("Is Paracetamol safe?")));
        assert!(!rule.matches(&normalize_message("Is ibuprofen safe?")));
    }
}
