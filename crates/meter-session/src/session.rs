//! Session: the single writer of the view state
//!
//! Joins the watcher and the renderer around one explicit `ViewState`.
//! Every event of the host (field change, reveal toggle, request completion)
//! is one method call; nothing here awaits, so the session can be driven by
//! any event loop and tested without one.

use crate::state::{Panel, ResultsArea, RevealMode, TipsPanel, ViewState};
use crate::watcher::{AssessmentRequest, DiscardReason, InputWatcher, RequestTicket, WatchDecision};
use meter_core::{FetchResult, MeterConfig, PasswordAssessment, TipsPayload};
use meter_render::Renderer;
use tracing::{debug, warn};

/// What a completion did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Assessment rendered
    Rendered,
    /// Failure shown as "unable to check"
    Unavailable,
    /// Stale completion ignored
    Discarded(DiscardReason),
}

impl ApplyOutcome {
    /// Whether the view changed
    #[inline]
    #[must_use]
    pub fn changed_view(self) -> bool {
        !matches!(self, Self::Discarded(_))
    }
}

/// Meter session
#[derive(Debug)]
pub struct Session {
    watcher: InputWatcher,
    renderer: Renderer,
    view: ViewState,
}

impl Session {
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self {
            watcher: InputWatcher::new(),
            renderer,
            view: ViewState::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &MeterConfig) -> Self {
        Self::new(Renderer::new(config.breach_qualifier.clone()))
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Ticket whose completion is awaited, if any
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<RequestTicket> {
        self.watcher.current()
    }

    /// Field value changed
    ///
    /// Returns the request to send, or `None` when the field was emptied.
    pub fn on_input(&mut self, value: &str) -> Option<AssessmentRequest> {
        match self.watcher.observe(value) {
            WatchDecision::Hide => {
                self.replace_results(ResultsArea::Hidden);
                None
            }
            WatchDecision::Evaluate(request) => {
                if !self.view.results().is_visible() {
                    self.replace_results(ResultsArea::Visible(Panel::NoData));
                }
                debug!(seq = request.ticket.seq(), "assessment requested");
                Some(request)
            }
        }
    }

    /// Reveal control activated
    pub fn on_toggle_reveal(&mut self) -> RevealMode {
        self.view.toggle_reveal()
    }

    /// Request completed
    pub fn on_assessment(
        &mut self,
        ticket: RequestTicket,
        outcome: FetchResult<PasswordAssessment>,
    ) -> ApplyOutcome {
        if let Err(reason) = self.watcher.accept(ticket) {
            debug!(seq = ticket.seq(), ?reason, "discarding stale completion");
            return ApplyOutcome::Discarded(reason);
        }

        match outcome {
            Ok(assessment) => {
                let rendered = self.renderer.render(&assessment);
                self.replace_results(ResultsArea::Visible(Panel::Rendered(rendered)));
                ApplyOutcome::Rendered
            }
            Err(e) => {
                warn!(seq = ticket.seq(), error = %e, "assessment unavailable");
                self.replace_results(ResultsArea::Visible(Panel::Unavailable(
                    e.notice().to_string(),
                )));
                ApplyOutcome::Unavailable
            }
        }
    }

    /// Startup tips load completed
    pub fn on_tips(&mut self, outcome: FetchResult<TipsPayload>) {
        match outcome {
            Ok(payload) => self.view.set_tips(TipsPanel::Loaded(payload.tips)),
            Err(e) => {
                warn!(error = %e, "tips unavailable");
                self.view.set_tips(TipsPanel::Unavailable);
            }
        }
    }

    fn replace_results(&mut self, next: ResultsArea) {
        if let Err(e) = self.view.set_results(next) {
            // Unreachable while ticket checks hold
            warn!(error = %e, "rejected results transition");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Renderer::default())
    }
}
