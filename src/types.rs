//! Score, strength label and evaluation result types.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of satisfied checks, from 0 to [`PasswordScore::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 4;

    /// Builds a score, clamping anything above [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<PasswordScore> for u8 {
    fn from(score: PasswordScore) -> Self {
        score.0
    }
}

/// Coarse strength label derived from a [`PasswordScore`].
///
/// Only a perfect score is `Strong` and only 3 is `Moderate`; 0, 1 and 2
/// all collapse into `Weak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            4 => PasswordStrength::Strong,
            3 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        }
    }

    /// Progress bar fill, in percent.
    pub fn intensity(&self) -> u8 {
        match self {
            PasswordStrength::Strong => 100,
            PasswordStrength::Moderate => 70,
            PasswordStrength::Weak => 40,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl From<PasswordScore> for PasswordStrength {
    fn from(score: PasswordScore) -> Self {
        Self::from_score(score)
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single evaluation.
///
/// `reasons` holds one message per failed check, in check order, so
/// `score + reasons.len()` is always 4.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}
