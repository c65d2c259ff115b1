//! Password strength meter library
//!
//! Scores a password against four rules (length, mixed case, digit,
//! special character), maps the 0-4 score to a Weak/Moderate/Strong label
//! and builds the report a form front end draws.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for evaluations and reports
//! - `web`: axum form server and the `pwd-meter-web` binary
//!
//! # Environment Variables
//!
//! Only read by the web server at startup:
//!
//! - `PWD_METER_ADDR`: Address to bind (default: `127.0.0.1:8501`)
//! - `PWD_METER_PORT`: Overrides the port of that address
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 3);
//! assert_eq!(evaluation.strength(), PasswordStrength::Moderate);
//! assert_eq!(evaluation.reasons.len(), 1);
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

pub mod config;
pub mod report;

#[cfg(feature = "web")]
pub mod web;

// Public API
pub use evaluator::evaluate_password_strength;
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_tx, DEBOUNCE};
