//! Sign-up password rules.
//!
//! The sign-up page shows a live checklist while the shopper types. Only the
//! length rule blocks submission; the rest are guidance.

use core::fmt;

use serde::Serialize;

/// Minimum number of characters a password must have to be accepted.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single rule on the password checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    /// At least [`MIN_PASSWORD_LENGTH`] characters.
    MinLength,
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one ASCII lowercase letter.
    Lowercase,
    /// At least one ASCII digit.
    Digit,
}

impl PasswordRule {
    /// Every rule, in checklist order.
    pub const ALL: [Self; 4] = [Self::MinLength, Self::Uppercase, Self::Lowercase, Self::Digit];

    /// Label shown next to the checklist bullet.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::Uppercase => "One uppercase letter",
            Self::Lowercase => "One lowercase letter",
            Self::Digit => "One number",
        }
    }

    /// Whether `password` satisfies this rule.
    #[must_use]
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one checklist rule against a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordCheck {
    /// The rule that was evaluated.
    pub rule: PasswordRule,
    /// Whether the password satisfied it.
    pub passed: bool,
}

/// Evaluate every checklist rule against `password`.
///
/// ```
/// use shopease_core::{PasswordRule, password_checks};
///
/// let checks = password_checks("hunter2");
/// assert!(!checks[0].passed); // too short
/// assert_eq!(checks[3].rule, PasswordRule::Digit);
/// assert!(checks[3].passed);
/// ```
#[must_use]
pub fn password_checks(password: &str) -> [PasswordCheck; 4] {
    PasswordRule::ALL.map(|rule| PasswordCheck {
        rule,
        passed: rule.is_satisfied_by(password),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passed(password: &str) -> Vec<PasswordRule> {
        password_checks(password)
            .into_iter()
            .filter(|check| check.passed)
            .map(|check| check.rule)
            .collect()
    }

    #[test]
    fn test_strong_password_passes_everything() {
        assert_eq!(passed("Sup3rSecret"), PasswordRule::ALL.to_vec());
    }

    #[test]
    fn test_empty_password_passes_nothing() {
        assert!(passed("").is_empty());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 7 characters, 14 bytes
        assert!(!PasswordRule::MinLength.is_satisfied_by("ééééééé"));
        assert!(PasswordRule::MinLength.is_satisfied_by("éééééééé"));
    }

    #[test]
    fn test_individual_rules() {
        assert_eq!(passed("lowercase"), vec![PasswordRule::MinLength, PasswordRule::Lowercase]);
        assert_eq!(passed("ABC"), vec![PasswordRule::Uppercase]);
        assert_eq!(passed("12345678"), vec![PasswordRule::MinLength, PasswordRule::Digit]);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = PasswordRule::ALL.iter().map(PasswordRule::label).collect();
        assert_eq!(
            labels,
            [
                "At least 8 characters",
                "One uppercase letter",
                "One lowercase letter",
                "One number"
            ]
        );
    }
}
