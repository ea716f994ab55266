//! Event pipeline
//!
//! One task owns the `Session` and reacts to host events and request
//! completions one at a time. Requests run concurrently in a `JoinSet` and may
//! finish in any order; the session's ticket check decides what is shown.

use crate::session::{ApplyOutcome, Session};
use crate::state::ViewState;
use crate::watcher::RequestTicket;
use meter_client::AssessmentService;
use meter_core::{FetchResult, Password, PasswordAssessment, TipsPayload};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Host event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Password field value changed; `Debug` output stays redacted
    Input(Password),
    /// Reveal control activated
    ToggleReveal,
    /// Stop accepting events; in-flight requests are drained first
    Shutdown,
}

/// Receives the view after every change
pub trait ViewSink: Send {
    fn view_changed(&mut self, view: &ViewState);
}

impl<F> ViewSink for F
where
    F: FnMut(&ViewState) + Send,
{
    fn view_changed(&mut self, view: &ViewState) {
        self(view);
    }
}

enum Completion {
    Assessment(RequestTicket, FetchResult<PasswordAssessment>),
    Tips(FetchResult<TipsPayload>),
}

/// Drives a session against an evaluation service
pub struct Pipeline {
    service: Arc<dyn AssessmentService>,
    session: Session,
}

impl Pipeline {
    #[must_use]
    pub fn new(service: Arc<dyn AssessmentService>, session: Session) -> Self {
        Self { service, session }
    }

    /// Evaluate one value and wait for its answer
    pub async fn assess_once(&mut self, value: &str) -> &ViewState {
        if let Some(request) = self.session.on_input(value) {
            let outcome = self.service.fetch_assessment(&request.password).await;
            self.session.on_assessment(request.ticket, outcome);
        }
        self.session.view()
    }

    /// Load tips and wait for them
    pub async fn load_tips(&mut self) -> &ViewState {
        let outcome = self.service.fetch_tips().await;
        self.session.on_tips(outcome);
        self.session.view()
    }

    /// Run until `Shutdown` or the event channel closes
    ///
    /// Tips are requested once at start. Requests still in flight at shutdown
    /// are awaited and applied (or discarded) before the session is returned.
    pub async fn run<S: ViewSink>(
        mut self,
        mut events: mpsc::Receiver<UiEvent>,
        mut sink: S,
    ) -> Session {
        let mut in_flight: JoinSet<Completion> = JoinSet::new();
        let mut closing = false;

        let service = Arc::clone(&self.service);
        in_flight.spawn(async move { Completion::Tips(service.fetch_tips().await) });
        info!("meter pipeline started");

        loop {
            if closing && in_flight.is_empty() {
                break;
            }

            tokio::select! {
                event = events.recv(), if !closing => match event {
                    Some(UiEvent::Input(value)) => {
                        if let Some(request) = self.session.on_input(value.expose()) {
                            let service = Arc::clone(&self.service);
                            in_flight.spawn(async move {
                                let outcome = service.fetch_assessment(&request.password).await;
                                Completion::Assessment(request.ticket, outcome)
                            });
                        }
                        sink.view_changed(self.session.view());
                    }
                    Some(UiEvent::ToggleReveal) => {
                        self.session.on_toggle_reveal();
                        sink.view_changed(self.session.view());
                    }
                    Some(UiEvent::Shutdown) | None => {
                        debug!(
                            in_flight = in_flight.len(),
                            pending = ?self.session.pending().map(RequestTicket::seq),
                            "pipeline closing"
                        );
                        closing = true;
                    }
                },
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => match joined {
                    Ok(Completion::Assessment(ticket, outcome)) => {
                        let applied: ApplyOutcome = self.session.on_assessment(ticket, outcome);
                        if applied.changed_view() {
                            sink.view_changed(self.session.view());
                        }
                    }
                    Ok(Completion::Tips(outcome)) => {
                        self.session.on_tips(outcome);
                        sink.view_changed(self.session.view());
                    }
                    Err(e) => warn!(error = %e, "request task failed"),
                },
            }
        }

        info!("meter pipeline stopped");
        self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_event_debug_hides_the_value() {
        let event = UiEvent::Input("hunter2".into());
        let shown = format!("{event:?}");

        assert_eq!(shown, "Input(Password(<7 chars>))");
        assert!(!shown.contains("hunter2"));
    }
}
