//! Assessment renderer
//!
//! Projects one `PasswordAssessment` onto the visual state of the results
//! area. The projection is pure: the same assessment always yields the same
//! `RenderedAssessment`, and every field of the output replaces the previous
//! render wholesale.

use crate::category::StrengthCategory;
use meter_core::config::DEFAULT_BREACH_QUALIFIER;
use meter_core::{ContractViolation, PasswordAssessment};
use serde::Serialize;

/// Text of the single feedback entry shown when the service sent none
pub const FEEDBACK_PLACEHOLDER: &str = "No feedback yet";

/// Text of the single issues entry shown when the service found none
pub const NO_ISSUES_TEXT: &str = "No issues found";

/// Marker printed in front of a list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// A defect
    Failure,
    /// Nothing wrong
    Success,
}

impl Glyph {
    /// Printed symbol
    #[inline]
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Failure => "❌",
            Self::Success => "✓",
        }
    }
}

/// One list item; `text` is always plain text, never markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Optional leading glyph
    pub glyph: Option<Glyph>,
    /// Item text
    pub text: String,
}

impl ListEntry {
    /// Entry without glyph
    #[inline]
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            glyph: None,
            text: text.into(),
        }
    }

    /// Entry with glyph
    #[inline]
    #[must_use]
    pub fn marked(glyph: Glyph, text: impl Into<String>) -> Self {
        Self {
            glyph: Some(glyph),
            text: text.into(),
        }
    }

    /// Text as displayed, glyph included
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.glyph {
            Some(glyph) => format!("{} {}", glyph.symbol(), self.text),
            None => self.text.clone(),
        }
    }
}

/// Score readout and bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReadout {
    /// `"{score}/100"`
    pub text: String,
    /// Bar width in percent of its track; `None` when the score is out of contract
    pub bar_percent: Option<u8>,
}

/// Strength label and its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthBadge {
    /// Visible label text
    pub label: String,
    /// Sole category applied to the label
    pub category: StrengthCategory,
}

/// Breach banner variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum BreachBanner {
    /// Password appears in a breach dataset
    Warning,
    /// Not found, qualified by how fresh the check is
    Safe {
        /// Freshness qualifier, e.g. "as of last check"
        qualifier: String,
    },
}

impl BreachBanner {
    /// Styling class of the banner container
    #[inline]
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Warning => "breach-check",
            Self::Safe { .. } => "breach-check safe",
        }
    }

    /// Banner text
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Warning => "⚠️ Warning: This password has been found in a data breach! \
                              Please use a different password."
                .to_string(),
            Self::Safe { qualifier } => format!(
                "✓ Safe: This password has not been found in known data breaches ({qualifier})."
            ),
        }
    }

    /// Whether this is the warning variant
    #[inline]
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

/// Complete visual state derived from one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedAssessment {
    /// Score readout and bar
    pub score: ScoreReadout,
    /// Label and category
    pub badge: StrengthBadge,
    /// Feedback list, never empty
    pub feedback: Vec<ListEntry>,
    /// Issues list, never empty
    pub issues: Vec<ListEntry>,
    /// Summary line
    pub message: String,
    /// Breach banner
    pub breach: BreachBanner,
    /// Contract violations found while rendering
    pub violations: Vec<ContractViolation>,
}

/// Renderer configured with the breach freshness qualifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    breach_qualifier: String,
}

impl Renderer {
    /// Create renderer with a breach freshness qualifier
    #[inline]
    #[must_use]
    pub fn new(breach_qualifier: impl Into<String>) -> Self {
        Self {
            breach_qualifier: breach_qualifier.into(),
        }
    }

    /// Project an assessment onto visual state
    #[must_use]
    pub fn render(&self, assessment: &PasswordAssessment) -> RenderedAssessment {
        let mut violations = Vec::new();

        let bar_percent = if assessment.score_in_range() {
            u8::try_from(assessment.score).ok()
        } else {
            violations.push(ContractViolation::ScoreOutOfRange(assessment.score));
            None
        };
        let score = ScoreReadout {
            text: format!("{}/100", assessment.score),
            bar_percent,
        };

        let category = StrengthCategory::from_level(assessment.strength_level);
        if !category.is_defined() {
            violations.push(ContractViolation::UnknownStrengthLevel(
                assessment.strength_level,
            ));
        }
        let badge = StrengthBadge {
            label: assessment.strength_label.clone(),
            category,
        };

        let feedback = if assessment.feedback.is_empty() {
            vec![ListEntry::plain(FEEDBACK_PLACEHOLDER)]
        } else {
            assessment
                .feedback
                .iter()
                .map(|item| ListEntry::plain(item.as_str()))
                .collect()
        };

        let issues = if assessment.issues.is_empty() {
            vec![ListEntry::marked(Glyph::Success, NO_ISSUES_TEXT)]
        } else {
            assessment
                .issues
                .iter()
                .map(|item| ListEntry::marked(Glyph::Failure, item.as_str()))
                .collect()
        };

        let breach = if assessment.breached {
            BreachBanner::Warning
        } else {
            BreachBanner::Safe {
                qualifier: self.breach_qualifier.clone(),
            }
        };

        for violation in &violations {
            tracing::warn!(%violation, "assessment outside service contract");
        }

        RenderedAssessment {
            score,
            badge,
            feedback,
            issues,
            message: assessment.message.clone(),
            breach,
            violations,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_BREACH_QUALIFIER)
    }
}
