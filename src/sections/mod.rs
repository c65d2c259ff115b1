//! Password evaluation sections
//!
//! Each section checks one rule and is worth one point.

mod case_mix;
mod digit;
mod length;
mod special;

pub use case_mix::case_mix_section;
pub use digit::digit_section;
pub use length::length_section;
pub use special::special_char_section;

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;
