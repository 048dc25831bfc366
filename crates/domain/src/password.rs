//! Password strength scoring for the registration form.

/// One rule a password is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
}

impl PasswordRule {
    /// All rules, in display order.
    pub const ALL: [PasswordRule; 4] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
    ];

    /// Minimum number of characters for [`PasswordRule::MinLength`].
    pub const MIN_LENGTH: usize = 8;

    /// Checklist label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::Uppercase => "Contains uppercase letter",
            Self::Lowercase => "Contains lowercase letter",
            Self::Digit => "Contains number",
        }
    }

    /// Whether `password` satisfies this rule.
    #[must_use]
    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= Self::MIN_LENGTH,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

/// Coarse strength bucket, used to colour the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// CSS modifier for the meter bar.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "strength-weak",
            Self::Medium => "strength-medium",
            Self::Strong => "strength-strong",
        }
    }
}

/// Result of checking a password against every [`PasswordRule`].
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordStrength {
    checks: Vec<(PasswordRule, bool)>,
}

impl PasswordStrength {
    /// Evaluate `password`.
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        let checks = PasswordRule::ALL
            .into_iter()
            .map(|rule| (rule, rule.is_satisfied_by(password)))
            .collect();
        Self { checks }
    }

    /// Each rule with whether it passed, in display order.
    #[must_use]
    pub fn checks(&self) -> &[(PasswordRule, bool)] {
        &self.checks
    }

    /// Number of rules that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|(_, ok)| *ok).count()
    }

    /// Fraction of rules passed, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score(&self) -> f64 {
        if self.checks.is_empty() {
            return 0.0;
        }
        self.passed() as f64 / self.checks.len() as f64
    }

    /// Bucketed strength: below one half is weak, below 0.8 is medium.
    #[must_use]
    pub fn level(&self) -> StrengthLevel {
        let score = self.score();
        if score < 0.5 {
            StrengthLevel::Weak
        } else if score < 0.8 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        }
    }
}
