//! Meter Render - Assessment Renderer
//!
//! Deterministic projection from an assessment to visual state:
//! - Score readout and proportional bar
//! - Exactly one strength category per render
//! - Feedback and issues lists with fixed placeholders
//! - Mutually exclusive breach banner variants
//! - Escaped HTML and plain-text surfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use meter_render::{Renderer, StrengthCategory};
//!
//! let rendered = Renderer::default().render(&assessment);
//! assert_eq!(rendered.badge.category, StrengthCategory::VeryWeak);
//! println!("{}", rendered.to_html());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod category;
pub mod renderer;
pub mod surface;

pub use category::StrengthCategory;
pub use renderer::{
    BreachBanner, Glyph, ListEntry, RenderedAssessment, Renderer, ScoreReadout, StrengthBadge,
    FEEDBACK_PLACEHOLDER, NO_ISSUES_TEXT,
};
pub use surface::{escape_html, list_html, text_list_html};
