//! Core types for the meter
//!
//! Wire shapes exchanged with the evaluation service:
//! - The assessment of one password value
//! - The request body carrying the password
//! - Tips and common-password lists
//! - The error envelope returned on failed requests

use serde::{Deserialize, Serialize};
use std::fmt;

/// Password field value
///
/// `Debug` is redacted so the secret cannot leak through logs or panics.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Password(String);

impl Password {
    /// Wrap a field value
    #[inline]
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value, for the request body only
    #[inline]
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the field is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.char_len())
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Body of the evaluation request
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssessmentRequestBody<'a> {
    /// The password, sole payload field
    pub password: &'a str,
}

impl<'a> AssessmentRequestBody<'a> {
    /// Build body for a password
    #[inline]
    #[must_use]
    pub fn new(password: &'a Password) -> Self {
        Self {
            password: password.expose(),
        }
    }
}

/// Assessment of one password value, as computed by the evaluation service
///
/// Numbers are kept wide so that values outside the service contract
/// (score 0-100, level 1-5) survive decoding and can be flagged by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordAssessment {
    /// Numeric quality measure, 0-100 by contract
    pub score: i64,
    /// Discrete category, 1-5 by contract
    #[serde(alias = "strengthLevel")]
    pub strength_level: i64,
    /// Display text paired with the level
    #[serde(rename = "strength", alias = "strength_label", alias = "strengthLabel")]
    pub strength_label: String,
    /// Improvement suggestions
    pub feedback: Vec<String>,
    /// Concrete defects found
    pub issues: Vec<String>,
    /// Summary line
    pub message: String,
    /// Known-compromised flag
    pub breached: bool,
}

impl PasswordAssessment {
    /// Whether the score lies in the contract range
    #[inline]
    #[must_use]
    pub fn score_in_range(&self) -> bool {
        (0..=100).contains(&self.score)
    }
}

/// Static guidance list, loaded once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipsPayload {
    /// Tips in display order
    pub tips: Vec<String>,
}

/// Commonly used weak passwords published by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonPasswords {
    /// Password list in service order
    pub common_passwords: Vec<String>,
}

/// Body the service sends alongside a non-success status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Short error description
    pub error: String,
}
