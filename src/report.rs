//! Presentation boundary.
//!
//! Turns a form submission into something a front end can draw. Front ends
//! only ever see `(score, strength, intensity, feedback)` plus the fixed
//! banner copy; they never call the sections directly.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::evaluator::evaluate_password_strength;
use crate::types::{PasswordEvaluation, PasswordScore, PasswordStrength};

/// Shown instead of a report when the form is submitted empty.
pub const EMPTY_INPUT_WARNING: &str = "Please enter a password.";

/// Heading of the collapsible feedback list.
pub const FEEDBACK_TITLE: &str = "Improve Your Password";

/// Visual tone of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Tone {
    Success,
    Info,
    Error,
    Warning,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Info => "info",
            Tone::Error => "error",
            Tone::Warning => "warning",
        }
    }
}

/// Banner copy for a strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Banner {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub tone: Tone,
}

impl Banner {
    pub fn for_strength(strength: PasswordStrength) -> Self {
        match strength {
            PasswordStrength::Strong => Banner {
                icon: "🟢",
                title: "Strong Password",
                message: "Your password is secure!",
                tone: Tone::Success,
            },
            PasswordStrength::Moderate => Banner {
                icon: "🟡",
                title: "Moderate Password",
                message: "Consider improving security.",
                tone: Tone::Info,
            },
            PasswordStrength::Weak => Banner {
                icon: "🔴",
                title: "Weak Password",
                message: "Follow suggestions below to strengthen it.",
                tone: Tone::Error,
            },
        }
    }

    /// `"<title> - <message>"`
    pub fn text(&self) -> String {
        format!("{} - {}", self.title, self.message)
    }
}

/// Everything needed to draw one result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StrengthReport {
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    /// Progress bar fill, in percent.
    pub intensity: u8,
    pub banner: Banner,
    pub feedback: Vec<String>,
}

impl StrengthReport {
    /// Whether the feedback list should be drawn at all.
    pub fn has_feedback(&self) -> bool {
        !self.feedback.is_empty()
    }
}

impl From<PasswordEvaluation> for StrengthReport {
    fn from(evaluation: PasswordEvaluation) -> Self {
        let strength = evaluation.strength();
        StrengthReport {
            score: evaluation.score,
            strength,
            intensity: strength.intensity(),
            banner: Banner::for_strength(strength),
            feedback: evaluation.reasons,
        }
    }
}

/// What a submit press produces.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum CheckOutcome {
    /// Nothing was typed; no evaluation took place.
    EmptyInput { message: &'static str },
    Evaluated(StrengthReport),
}

/// Handles one submission of the form.
pub fn check_submission(password: &SecretString) -> CheckOutcome {
    if password.expose_secret().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("empty submission, skipping evaluation");
        return CheckOutcome::EmptyInput {
            message: EMPTY_INPUT_WARNING,
        };
    }

    CheckOutcome::Evaluated(evaluate_password_strength(password).into())
}
