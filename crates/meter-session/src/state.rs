//! View state of the meter
//!
//! The results area moves through `Hidden -> NoData -> Rendered`, with
//! `Unavailable` standing in for a result that could not be obtained. Every
//! phase may fall back to `Hidden` when the field is emptied; there is no
//! terminal phase.

use meter_render::{escape_html, text_list_html, RenderedAssessment};
use std::fmt::Write;

/// Phase of the results area, for transition checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaPhase {
    /// Nothing shown
    Hidden,
    /// Visible, waiting for the first result
    NoData,
    /// Visible with an assessment
    Rendered,
    /// Visible with an "unable to check" notice
    Unavailable,
}

/// Illegal results-area transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal results transition {from:?} -> {to:?}")]
pub struct TransitionError {
    pub from: AreaPhase,
    pub to: AreaPhase,
}

/// Phases reachable from `from` in one step
///
/// `Hidden` is reachable from every phase. A visible area never returns to
/// `NoData` once a result or a failure has been shown.
pub fn allowed_transitions(from: AreaPhase) -> Vec<AreaPhase> {
    match from {
        AreaPhase::Hidden => vec![AreaPhase::Hidden, AreaPhase::NoData],
        AreaPhase::NoData => vec![
            AreaPhase::NoData,
            AreaPhase::Rendered,
            AreaPhase::Unavailable,
            AreaPhase::Hidden,
        ],
        AreaPhase::Rendered => vec![AreaPhase::Rendered, AreaPhase::Unavailable, AreaPhase::Hidden],
        AreaPhase::Unavailable => {
            vec![AreaPhase::Unavailable, AreaPhase::Rendered, AreaPhase::Hidden]
        }
    }
}

/// Check one results-area move against `allowed_transitions`
pub fn validate_transition(from: AreaPhase, to: AreaPhase) -> Result<(), TransitionError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(TransitionError { from, to })
    }
}

/// Content of a visible results area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Request issued, nothing received yet
    NoData,
    /// Latest accepted assessment
    Rendered(RenderedAssessment),
    /// Latest request failed
    Unavailable(String),
}

/// Results area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsArea {
    /// Field empty
    #[default]
    Hidden,
    /// Field non-empty
    Visible(Panel),
}

impl ResultsArea {
    #[must_use]
    pub fn phase(&self) -> AreaPhase {
        match self {
            Self::Hidden => AreaPhase::Hidden,
            Self::Visible(Panel::NoData) => AreaPhase::NoData,
            Self::Visible(Panel::Rendered(_)) => AreaPhase::Rendered,
            Self::Visible(Panel::Unavailable(_)) => AreaPhase::Unavailable,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Assessment on screen, if any
    #[must_use]
    pub fn rendered(&self) -> Option<&RenderedAssessment> {
        match self {
            Self::Visible(Panel::Rendered(rendered)) => Some(rendered),
            _ => None,
        }
    }
}

/// Display mode of the password field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    #[default]
    Obscured,
    Plain,
}

impl RevealMode {
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Obscured => Self::Plain,
            Self::Plain => Self::Obscured,
        }
    }

    /// `type` attribute of the input element
    #[inline]
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Obscured => "password",
            Self::Plain => "text",
        }
    }
}

/// Static tips list, loaded once
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TipsPanel {
    #[default]
    Loading,
    Loaded(Vec<String>),
    Unavailable,
}

/// Everything the page shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    results: ResultsArea,
    reveal: RevealMode,
    tips: TipsPanel,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn results(&self) -> &ResultsArea {
        &self.results
    }

    #[inline]
    #[must_use]
    pub fn reveal(&self) -> RevealMode {
        self.reveal
    }

    #[inline]
    #[must_use]
    pub fn tips(&self) -> &TipsPanel {
        &self.tips
    }

    pub(crate) fn set_results(&mut self, next: ResultsArea) -> Result<(), TransitionError> {
        validate_transition(self.results.phase(), next.phase())?;
        self.results = next;
        Ok(())
    }

    /// Flip obscured/plain display; the results area is untouched
    pub(crate) fn toggle_reveal(&mut self) -> RevealMode {
        self.reveal = self.reveal.toggled();
        self.reveal
    }

    pub(crate) fn set_tips(&mut self, tips: TipsPanel) {
        self.tips = tips;
    }

    /// HTML fragment of the results area; all service text escaped
    #[must_use]
    pub fn results_html(&self) -> String {
        let mut out = String::new();
        match &self.results {
            ResultsArea::Hidden => {
                out.push_str("<section class=\"strength-section\" style=\"display: none\"></section>");
            }
            ResultsArea::Visible(panel) => {
                out.push_str("<section class=\"strength-section\">");
                match panel {
                    Panel::NoData => out.push_str("<p class=\"message-text\">Checking…</p>"),
                    Panel::Rendered(rendered) => out.push_str(&rendered.to_html()),
                    Panel::Unavailable(notice) => {
                        let _ = write!(
                            out,
                            "<p class=\"message-text unavailable\">{}</p>",
                            escape_html(notice)
                        );
                    }
                }
                out.push_str("</section>");
            }
        }
        out
    }

    /// HTML fragment of the tips list
    #[must_use]
    pub fn tips_html(&self) -> String {
        match &self.tips {
            TipsPanel::Loading => "<ul class=\"tips-list\"></ul>".to_string(),
            TipsPanel::Loaded(tips) => text_list_html("tips-list", tips),
            TipsPanel::Unavailable => {
                "<ul class=\"tips-list unavailable\"><li>Tips are unavailable.</li></ul>"
                    .to_string()
            }
        }
    }

    /// Terminal lines of the results area
    #[must_use]
    pub fn results_text(&self) -> Vec<String> {
        match &self.results {
            ResultsArea::Hidden => Vec::new(),
            ResultsArea::Visible(Panel::NoData) => vec!["Checking…".to_string()],
            ResultsArea::Visible(Panel::Rendered(rendered)) => rendered.to_text(),
            ResultsArea::Visible(Panel::Unavailable(notice)) => vec![notice.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_phase() -> impl Strategy<Value = AreaPhase> {
        prop_oneof![
            Just(AreaPhase::Hidden),
            Just(AreaPhase::NoData),
            Just(AreaPhase::Rendered),
            Just(AreaPhase::Unavailable),
        ]
    }

    #[test]
    fn hidden_cannot_jump_to_rendered() {
        assert!(validate_transition(AreaPhase::Hidden, AreaPhase::NoData).is_ok());
        assert!(validate_transition(AreaPhase::Hidden, AreaPhase::Rendered).is_err());
        assert!(validate_transition(AreaPhase::Hidden, AreaPhase::Unavailable).is_err());
    }

    #[test]
    fn rendered_does_not_fall_back_to_no_data() {
        assert!(validate_transition(AreaPhase::Rendered, AreaPhase::NoData).is_err());
        assert!(validate_transition(AreaPhase::Rendered, AreaPhase::Rendered).is_ok());
    }

    #[test]
    fn set_results_rejects_illegal_move() {
        let mut view = ViewState::new();
        let err = view
            .set_results(ResultsArea::Visible(Panel::Unavailable("x".into())))
            .unwrap_err();

        assert_eq!(err.from, AreaPhase::Hidden);
        assert_eq!(view.results(), &ResultsArea::Hidden);
    }

    #[test]
    fn reveal_toggles_input_type() {
        assert_eq!(RevealMode::default().input_type(), "password");
        assert_eq!(RevealMode::default().toggled().input_type(), "text");
        assert_eq!(RevealMode::Plain.toggled(), RevealMode::Obscured);
    }

    #[test]
    fn view_owns_the_reveal_mode() {
        let mut view = ViewState::new();
        assert_eq!(view.reveal(), RevealMode::Obscured);

        assert_eq!(view.toggle_reveal(), RevealMode::Plain);
        assert_eq!(view.reveal(), RevealMode::Plain);
        assert_eq!(view.toggle_reveal(), RevealMode::Obscured);
        assert_eq!(view.results(), &ResultsArea::Hidden);
    }

    #[test]
    fn hidden_area_renders_display_none() {
        let view = ViewState::new();
        assert!(view.results_html().contains("display: none"));
        assert!(view.results_text().is_empty());
    }

    #[test]
    fn tips_are_escaped() {
        let mut view = ViewState::new();
        view.set_tips(TipsPanel::Loaded(vec!["Use <b>12</b> chars".into()]));

        assert_eq!(
            view.tips_html(),
            "<ul class=\"tips-list\"><li>Use &lt;b&gt;12&lt;/b&gt; chars</li></ul>"
        );
    }

    proptest! {
        #[test]
        fn every_phase_can_be_hidden(from in any_phase()) {
            prop_assert!(validate_transition(from, AreaPhase::Hidden).is_ok());
        }

        #[test]
        fn validation_matches_table(from in any_phase(), to in any_phase()) {
            let allowed = allowed_transitions(from);
            prop_assert_eq!(validate_transition(from, to).is_ok(), allowed.contains(&to));
        }
    }
}
