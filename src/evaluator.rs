//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    case_mix_section, digit_section, length_section, special_char_section, SectionResult,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Delay before an async evaluation starts, so that a burst of keystrokes
/// only yields one result.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

type Section = (&'static str, fn(&SecretString) -> SectionResult);

// Order matters: reasons are reported in this order.
const SECTIONS: [Section; 4] = [
    ("length", length_section),
    ("case_mix", case_mix_section),
    ("digit", digit_section),
    ("special", special_char_section),
];

/// Evaluates password strength.
///
/// Never fails: every string, including the empty one, gets a score from
/// 0 to 4 and one reason per failed section.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut reasons = Vec::new();
    let mut passed: u8 = 0;

    for (_section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section {} failed", _section_name);
                reasons.push(reason);
            }
            None => passed += 1,
        }
    }

    let score = PasswordScore::new(passed);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), failed = reasons.len(), "password evaluated");

    PasswordEvaluation { score, reasons }
}

/// Async version that sends evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled during the wait the
/// password is not evaluated and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;
    use proptest::prelude::*;

    fn evaluate(pwd: &str) -> PasswordEvaluation {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    const LENGTH_MSG: &str = "Password should be at least 8 characters long.";
    const CASE_MSG: &str =
        "Password should include both uppercase (A-Z) and lowercase (a-z) letters.";
    const DIGIT_MSG: &str = "Password should include at least one number (0-9).";
    const SPECIAL_MSG: &str =
        "Password should include at least one special character (!@#$%^&*<>).";

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(
            evaluation.reasons,
            vec![LENGTH_MSG, CASE_MSG, DIGIT_MSG, SPECIAL_MSG]
        );
    }

    #[test]
    fn test_evaluate_length_only() {
        let evaluation = evaluate("abcdefgh");
        assert_eq!(evaluation.score.value(), 1);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.reasons, vec![CASE_MSG, DIGIT_MSG, SPECIAL_MSG]);
    }

    #[test]
    fn test_evaluate_moderate_password() {
        let evaluation = evaluate("Abcdefg1");
        assert_eq!(evaluation.score.value(), 3);
        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
        assert_eq!(evaluation.reasons, vec![SPECIAL_MSG]);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate("Abcdefg1!");
        assert_eq!(evaluation.score.value(), 4);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_no_lowercase() {
        let evaluation = evaluate("ABCDEFG1!");
        assert_eq!(evaluation.score.value(), 3);
        assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
        assert_eq!(evaluation.reasons, vec![CASE_MSG]);
    }

    #[test]
    fn test_evaluate_two_points_is_weak() {
        let evaluation = evaluate("Ab1");
        assert_eq!(evaluation.score.value(), 2);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
        assert_eq!(evaluation.reasons, vec![LENGTH_MSG, SPECIAL_MSG]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for pwd in ["", "abcdefgh", "Abcdefg1!", "\u{0}\u{10FFFF}ünïcødé"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
        }
    }

    #[test]
    fn test_evaluate_pathological_input() {
        let long = "x".repeat(100_000);
        let evaluation = evaluate(&long);
        assert_eq!(evaluation.score.value(), 1);

        let controls = "\u{0}\u{7}\n\t\r\u{feff}";
        assert_eq!(evaluate(controls).score.value(), 0);
    }

    fn predicates(pwd: &str) -> [bool; 4] {
        [
            pwd.chars().count() >= 8,
            pwd.chars().any(|c| c.is_ascii_uppercase())
                && pwd.chars().any(|c| c.is_ascii_lowercase()),
            pwd.chars().any(|c| c.is_ascii_digit()),
            pwd.chars().any(|c| "!@#$%^&*<>".contains(c)),
        ]
    }

    proptest! {
        #[test]
        fn prop_score_counts_satisfied_checks(pwd in any::<String>()) {
            let evaluation = evaluate(&pwd);
            let satisfied = predicates(&pwd).iter().filter(|&&b| b).count();

            prop_assert!(evaluation.score.value() <= 4);
            prop_assert_eq!(evaluation.score.value() as usize, satisfied);
            prop_assert_eq!(evaluation.reasons.len(), 4 - satisfied);
        }

        #[test]
        fn prop_reasons_keep_check_order(pwd in "[a-zA-Z0-9!@#<> ]{0,12}") {
            let evaluation = evaluate(&pwd);
            let all = [LENGTH_MSG, CASE_MSG, DIGIT_MSG, SPECIAL_MSG];
            let expected: Vec<&str> = predicates(&pwd)
                .iter()
                .zip(all)
                .filter(|(ok, _)| !**ok)
                .map(|(_, msg)| msg)
                .collect();
            prop_assert_eq!(evaluation.reasons, expected);
        }
    }
}
