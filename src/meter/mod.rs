// src/meter/mod.rs
pub mod blacklist;

pub use blacklist::{is_blacklisted, BLACKLIST};

use crate::models::{StrengthLabel, StrengthReport};

/// Minimum length the evaluator rewards.
pub const MIN_LENGTH: usize = 8;

/// Special symbols the evaluator looks for; the generator draws from the
/// same set.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Highest score the checks can add up to.
pub const MAX_SCORE: u8 = 5;

/// Score a password against the rule set.
///
/// Total over all string inputs: never panics, never errors. A blacklisted
/// password short-circuits with a fixed score of 1; otherwise four
/// independent checks accumulate points and each failed check contributes
/// one tip.
pub fn evaluate(password: &str) -> StrengthReport {
    if is_blacklisted(password) {
        return StrengthReport {
            score: 1,
            label: StrengthLabel::Blacklisted,
            tips: vec![
                "This password is too common. Please choose a more unique password."
                    .to_string(),
            ],
        };
    }

    let mut score: u8 = 0;
    let mut tips = Vec::new();

    if password.chars().count() >= MIN_LENGTH {
        score += 2;
    } else {
        tips.push(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        ));
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        score += 1;
    } else {
        tips.push("Include both uppercase and lowercase letters.".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        tips.push("Add at least one number (0-9).".to_string());
    }

    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 1;
    } else {
        tips.push(format!(
            "Include at least one special character ({}).",
            SPECIAL_CHARS
        ));
    }

    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3 => StrengthLabel::Moderate,
        _ => StrengthLabel::Strong,
    };

    StrengthReport { score, label, tips }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklisted_passwords_short_circuit() {
        for pwd in ["password", "Password123", "LETMEIN", "qwerty"] {
            let report = evaluate(pwd);
            assert_eq!(report.score, 1, "{pwd}");
            assert_eq!(report.label, StrengthLabel::Blacklisted);
            assert_eq!(report.tips.len(), 1);
        }
    }

    #[test]
    fn all_checks_passing_scores_five() {
        let report = evaluate("Password123!");
        assert_eq!(report.score, 5);
        assert_eq!(report.label, StrengthLabel::Strong);
        assert!(report.tips.is_empty());
    }

    #[test]
    fn short_lowercase_password_fails_everything() {
        let report = evaluate("abc");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::Weak);
        assert_eq!(report.tips.len(), 4);
    }

    #[test]
    fn length_alone_is_still_weak() {
        // Long enough (+2) but single-case, no digit, no special.
        let report = evaluate("ABCDEFGH");
        assert_eq!(report.score, 2);
        assert_eq!(report.label, StrengthLabel::Weak);
        assert_eq!(report.tips.len(), 3);
    }

    #[test]
    fn missing_special_character_caps_at_four() {
        let report = evaluate("Abcdefg1");
        assert_eq!(report.score, 4);
        assert_eq!(report.label, StrengthLabel::Strong);
        assert_eq!(report.tips.len(), 1);
    }

    #[test]
    fn three_points_is_moderate() {
        // Length (+2) and digit (+1); single case, no special.
        let report = evaluate("abcdefg1");
        assert_eq!(report.score, 3);
        assert_eq!(report.label, StrengthLabel::Moderate);
        assert_eq!(report.tips.len(), 2);
    }

    #[test]
    fn empty_password_fails_every_check() {
        let report = evaluate("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::Weak);
        assert_eq!(report.tips.len(), 4);
    }

    #[test]
    fn evaluation_is_idempotent() {
        assert_eq!(evaluate("Abcdefg1"), evaluate("Abcdefg1"));
        assert_eq!(evaluate(""), evaluate(""));
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Eight two-byte characters still satisfy the length check.
        let report = evaluate("ääääääää");
        assert_eq!(report.score, 2);
    }
}
