//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub(crate) const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in Unicode scalar values (`chars`), so a multi-byte
/// character counts once.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(
            result,
            Some("Password should be at least 8 characters long.".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(length_section(&pwd).is_some());
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        let short = SecretString::new("ééééééé".to_string().into());
        assert!(length_section(&short).is_some());

        // 8 chars, 16 bytes
        let exact = SecretString::new("éééééééé".to_string().into());
        assert_eq!(length_section(&exact), None);
    }
}
