//! Special character section.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Characters that count as "special". Anything else (`-`, `_`, `?`,
/// spaces, ...) does not.
pub(crate) const SPECIAL_CHARS: [char; 10] = ['!', '@', '#', '$', '%', '^', '&', '*', '<', '>'];

/// Checks for at least one character from [`SPECIAL_CHARS`].
pub fn special_char_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(&c))
    {
        return Some(
            "Password should include at least one special character (!@#$%^&*<>).".to_string(),
        );
    }
    None
}
