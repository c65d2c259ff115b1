//! Case mixture section - requires both ASCII uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks for at least one `A-Z` and at least one `a-z`.
///
/// Both are needed for the point; non-ASCII letters do not count.
pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some(
            "Password should include both uppercase (A-Z) and lowercase (a-z) letters."
                .to_string(),
        );
    }
    None
}
