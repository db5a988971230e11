use pagebot_types::intent::Intent;

use super::rules::{IntentRule, INTENT_RULES};

/// Classify an utterance against the built-in rule table.
///
/// Total: empty or unmatched input yields `Intent::Fallback`.
pub fn classify(utterance: &str) -> Intent {
    classify_with(INTENT_RULES, utterance)
}

/// Classify against an explicit rule table.
///
/// The utterance is lowercased and nothing else (no trimming, no stemming).
/// Keywords are plain substrings, so "ai" also hits "email" or "detail";
/// callers relying on exact wording should order rules accordingly.
pub fn classify_with(rules: &[IntentRule], utterance: &str) -> Intent {
    let normalized = utterance.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map_or(Intent::Fallback, |rule| rule.intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_reachable() {
        assert_eq!(classify("Show me a project"), Intent::Projects);
        assert_eq!(classify("what skills do you have"), Intent::Skills);
        assert_eq!(classify("tell me about machine learning"), Intent::Ai);
        assert_eq!(classify("how do I contact you"), Intent::Contact);
        assert_eq!(classify("what is your background"), Intent::Experience);
        assert_eq!(classify("bio please"), Intent::About);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(classify("PROJECTS"), Intent::Projects);
        assert_eq!(classify("Which Technology?"), Intent::Skills);
    }

    #[test]
    fn test_empty_and_unmatched_fall_back() {
        assert_eq!(classify(""), Intent::Fallback);
        assert_eq!(classify("   "), Intent::Fallback);
        assert_eq!(classify("asdkjh"), Intent::Fallback);
    }

    #[test]
    fn test_priority_earlier_rule_wins() {
        assert_eq!(classify("which project used this skill"), Intent::Projects);
        assert_eq!(classify("skills in ai"), Intent::Skills);
        assert_eq!(classify("can I hire someone with that experience"), Intent::Contact);
        // "about" is the last rule, so "projects" beats it.
        assert_eq!(classify("Tell me about your projects"), Intent::Projects);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "work" inside "network" still counts.
        assert_eq!(classify("network"), Intent::Projects);
        // "ai" inside "email" counts and outranks "contact".
        assert_eq!(classify("what is your email contact"), Intent::Ai);
    }

    #[test]
    fn test_deterministic() {
        let input = "What are your skills?";
        let first = classify(input);
        for _ in 0..10 {
            assert_eq!(classify(input), first);
        }
    }

    #[test]
    fn test_custom_rule_order_changes_outcome() {
        let rules = [
            IntentRule::new(&["skill"], Intent::Skills),
            IntentRule::new(&["project"], Intent::Projects),
        ];
        assert_eq!(classify_with(&rules, "project skill"), Intent::Skills);
        assert_eq!(classify_with(&[], "project skill"), Intent::Fallback);
    }
}
