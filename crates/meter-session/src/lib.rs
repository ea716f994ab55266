//! Meter Session - Input Watcher and the render pipeline
//!
//! The page side of the strength meter:
//! - Watches the password field and issues ticketed requests
//! - Keeps one explicit `ViewState` with a validated results-area state machine
//! - Discards completions that a newer keystroke or a cleared field superseded
//! - Runs the event loop that joins watcher, fetcher and renderer
//!
//! # Example
//!
//! ```rust,ignore
//! use meter_session::{Pipeline, Session, UiEvent};
//! use std::sync::Arc;
//!
//! # async fn example(service: Arc<dyn meter_client::AssessmentService>) {
//! let (tx, rx) = tokio::sync::mpsc::channel(32);
//! let pipeline = Pipeline::new(service, Session::default());
//! let task = tokio::spawn(pipeline.run(rx, |view: &meter_session::ViewState| {
//!     println!("{}", view.results_html());
//! }));
//!
//! tx.send(UiEvent::Input("a".into())).await.unwrap();
//! tx.send(UiEvent::Shutdown).await.unwrap();
//! let session = task.await.unwrap();
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
pub mod session;
pub mod state;
pub mod watcher;

pub use pipeline::{Pipeline, UiEvent, ViewSink};
pub use session::{ApplyOutcome, Session};
pub use state::{
    allowed_transitions, validate_transition, AreaPhase, Panel, ResultsArea, RevealMode,
    TipsPanel, TransitionError, ViewState,
};
pub use watcher::{AssessmentRequest, DiscardReason, InputWatcher, RequestTicket, WatchDecision};
