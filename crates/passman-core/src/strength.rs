//! Password strength heuristic
//!
//! A five-predicate tally, not an entropy estimate: length over 6, length
//! over 10, an uppercase letter, a digit, a character outside
//! `[A-Za-z0-9]`. The tally indexes a five-level scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-level ordinal strength classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    /// Meter fill, as a percentage
    pub fn fill_percent(&self) -> u8 {
        match self {
            StrengthLevel::VeryWeak => 20,
            StrengthLevel::Weak => 40,
            StrengthLevel::Medium => 60,
            StrengthLevel::Strong => 80,
            StrengthLevel::VeryStrong => 100,
        }
    }

    fn from_tally(tally: u8) -> Self {
        match tally {
            0 => StrengthLevel::VeryWeak,
            1 => StrengthLevel::Weak,
            2 => StrengthLevel::Medium,
            3 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password on the five-level scale
pub fn score(password: &str) -> StrengthLevel {
    let len = password.chars().count();
    let mut tally = 0u8;

    if len > 6 {
        tally += 1;
    }
    if len > 10 {
        tally += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        tally += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        tally += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        tally += 1;
    }

    StrengthLevel::from_tally(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lowercase_is_very_weak() {
        assert_eq!(score("abc"), StrengthLevel::VeryWeak);
        assert_eq!(score(""), StrengthLevel::VeryWeak);
    }

    #[test]
    fn test_ten_lowercase_letters_clear_only_the_first_bar() {
        // Length 10 passes "over 6" but not "over 10"
        assert_eq!(score("abcdefghij"), StrengthLevel::Weak);
        assert!(score("abcdefghij") >= StrengthLevel::Weak);
    }

    #[test]
    fn test_four_predicates_reach_the_top_level() {
        // Length 10: over 6, not over 10; uppercase, digit, and symbol
        assert_eq!(score("Abcdefgh1!"), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_all_five_predicates_stay_clamped_at_the_top() {
        assert_eq!(score("Abcdefghijk1!"), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_each_class_counts_once() {
        // 7 lowercase: length only
        assert_eq!(score("abcdefg"), StrengthLevel::Weak);
        // plus uppercase
        assert_eq!(score("Abcdefg"), StrengthLevel::Medium);
        // plus digit
        assert_eq!(score("Abcdef1"), StrengthLevel::Strong);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // One char: no length credit, not ASCII alphanumeric
        assert_eq!(score("é"), StrengthLevel::Weak);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(StrengthLevel::VeryWeak < StrengthLevel::Weak);
        assert!(StrengthLevel::Strong < StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_display_metadata() {
        assert_eq!(StrengthLevel::VeryWeak.label(), "Very Weak");
        assert_eq!(StrengthLevel::VeryWeak.fill_percent(), 20);
        assert_eq!(StrengthLevel::VeryStrong.label(), "Very Strong");
        assert_eq!(StrengthLevel::VeryStrong.fill_percent(), 100);
        assert_eq!(StrengthLevel::Medium.to_string(), "Medium");
    }
}
