use pagebot_types::intent::Intent;

/// One row of the keyword table: any keyword hit selects `intent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    /// Lowercase substrings matched against the lowercased utterance.
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

impl IntentRule {
    pub const fn new(keywords: &'static [&'static str], intent: Intent) -> Self {
        Self { keywords, intent }
    }

    /// Whether any keyword occurs in `normalized` (already lowercased).
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// Rules in priority order. The first matching rule wins, so this order is
/// part of the contract: "what projects use AI?" is a `Projects` question.
pub static INTENT_RULES: &[IntentRule] = &[
    IntentRule::new(&["project", "work"], Intent::Projects),
    IntentRule::new(&["skill", "technology"], Intent::Skills),
    IntentRule::new(&["ai", "machine learning"], Intent::Ai),
    IntentRule::new(&["contact", "hire"], Intent::Contact),
    IntentRule::new(&["experience", "background"], Intent::Experience),
    IntentRule::new(&["about", "bio"], Intent::About),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_pinned() {
        let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Projects,
                Intent::Skills,
                Intent::Ai,
                Intent::Contact,
                Intent::Experience,
                Intent::About,
            ]
        );
    }

    #[test]
    fn test_fallback_has_no_rule() {
        assert!(INTENT_RULES.iter().all(|r| r.intent != Intent::Fallback));
    }

    #[test]
    fn test_keywords_are_lowercase_and_non_empty() {
        for rule in INTENT_RULES {
            assert!(!rule.keywords.is_empty());
            for kw in rule.keywords {
                assert!(!kw.is_empty());
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_rule_matches_any_keyword() {
        let rule = IntentRule::new(&["contact", "hire"], Intent::Contact);
        assert!(rule.matches("can i hire you"));
        assert!(rule.matches("contact info"));
        assert!(!rule.matches("hello"));
    }
}
