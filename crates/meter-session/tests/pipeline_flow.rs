//! End-to-end flows through the pipeline.
//!
//! The scripted service delays answers per password; with paused time the
//! completion order is exact, so these tests pin down which response is on
//! screen after keystrokes race each other.

use meter_client::AssessmentService;
use meter_core::FetchError;
use meter_session::{AreaPhase, Pipeline, ResultsArea, Session, TipsPanel, UiEvent, ViewState};
use meter_render::StrengthCategory;
use meter_test_utils::{default_tips, strong_assessment, very_weak_assessment, ScriptedService};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

type Phases = Arc<Mutex<Vec<AreaPhase>>>;

/// Send events, let every scripted delay elapse, shut down, return the session
/// and the phase of the results area after each view change.
async fn drive(service: ScriptedService, events: Vec<UiEvent>) -> (Session, Vec<AreaPhase>) {
    let phases: Phases = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&phases);

    let (tx, rx) = mpsc::channel(16);
    let pipeline = Pipeline::new(Arc::new(service), Session::default());
    let task = tokio::spawn(pipeline.run(rx, move |view: &ViewState| {
        recorder.lock().push(view.results().phase());
    }));

    for event in events {
        tx.send(event).await.unwrap();
    }
    tokio::time::sleep(Duration::from_secs(5)).await;
    tx.send(UiEvent::Shutdown).await.unwrap();

    let session = task.await.unwrap();
    let phases = phases.lock().clone();
    (session, phases)
}

#[tokio::test(start_paused = true)]
async fn single_keystroke_renders_assessment() {
    let service = ScriptedService::new().answer("a", very_weak_assessment());

    let (session, phases) = drive(service, vec![UiEvent::Input("a".into())]).await;

    let rendered = session.view().results().rendered().expect("rendered");
    assert_eq!(rendered.score.text, "5/100");
    assert_eq!(rendered.badge.category, StrengthCategory::VeryWeak);
    assert!(phases.contains(&AreaPhase::NoData));
    assert_eq!(phases.last(), Some(&AreaPhase::Rendered));
}

#[tokio::test(start_paused = true)]
async fn slow_older_response_does_not_overwrite_newer() {
    let service = ScriptedService::new()
        .answer_after("a", Duration::from_millis(800), very_weak_assessment())
        .answer_after("aB3$xyz!", Duration::from_millis(100), strong_assessment());

    let (session, _) = drive(
        service,
        vec![
            UiEvent::Input("a".into()),
            UiEvent::Input("aB3$xyz!".into()),
        ],
    )
    .await;

    let rendered = session.view().results().rendered().expect("rendered");
    assert_eq!(rendered.badge.category, StrengthCategory::Strong);
    assert_eq!(rendered.score.text, "72/100");
}

#[tokio::test(start_paused = true)]
async fn cleared_field_stays_hidden_after_late_response() {
    let service = ScriptedService::new()
        .answer_after("a", Duration::from_millis(500), very_weak_assessment());

    let (session, phases) = drive(
        service,
        vec![UiEvent::Input("a".into()), UiEvent::Input("".into())],
    )
    .await;

    assert_eq!(session.view().results(), &ResultsArea::Hidden);
    assert!(!phases.contains(&AreaPhase::Rendered));
    assert_eq!(phases.last(), Some(&AreaPhase::Hidden), "{phases:?}");
}

#[tokio::test(start_paused = true)]
async fn failure_shows_unavailable_notice() {
    let service = ScriptedService::new().fail_after(
        "a",
        Duration::from_millis(50),
        FetchError::Timeout { secs: 10 },
    );

    let (session, _) = drive(service, vec![UiEvent::Input("a".into())]).await;

    assert_eq!(session.view().results().phase(), AreaPhase::Unavailable);
    assert_eq!(
        session.view().results_text(),
        vec!["The strength checker did not answer in time.".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn tips_load_once_at_start() {
    let (session, _) = drive(ScriptedService::new(), Vec::new()).await;

    assert_eq!(session.view().tips(), &TipsPanel::Loaded(default_tips().tips));
    assert_eq!(session.view().results(), &ResultsArea::Hidden);
}

#[tokio::test(start_paused = true)]
async fn tips_failure_does_not_affect_results() {
    let service = ScriptedService::new()
        .with_tips(Err(FetchError::Transport("refused".into())))
        .answer("a", very_weak_assessment());

    let (session, _) = drive(service, vec![UiEvent::Input("a".into())]).await;

    assert_eq!(session.view().tips(), &TipsPanel::Unavailable);
    assert_eq!(session.view().results().phase(), AreaPhase::Rendered);
}

#[tokio::test(start_paused = true)]
async fn every_keystroke_is_sent() {
    let service = Arc::new(
        ScriptedService::new()
            .answer("a", very_weak_assessment())
            .answer("ab", very_weak_assessment())
            .answer("abc", very_weak_assessment()),
    );

    let shared: Arc<dyn AssessmentService> = Arc::clone(&service) as Arc<dyn AssessmentService>;
    let (tx, rx) = mpsc::channel(16);
    let pipeline = Pipeline::new(shared, Session::default());
    let task = tokio::spawn(pipeline.run(rx, |_: &ViewState| {}));

    for value in ["a", "ab", "", "abc"] {
        tx.send(UiEvent::Input(value.into())).await.unwrap();
    }
    drop(tx);
    let session = task.await.unwrap();

    assert_eq!(service.calls(), vec!["a", "ab", "abc"]);
    assert_eq!(session.view().results().phase(), AreaPhase::Rendered);
}

#[tokio::test]
async fn assess_once_renders_html() {
    let service = ScriptedService::new().answer("a", very_weak_assessment());
    let mut pipeline = Pipeline::new(Arc::new(service), Session::default());

    let html = pipeline.assess_once("a").await.results_html();

    assert!(html.starts_with("<section class=\"strength-section\">"));
    assert!(html.contains("strength-very-weak"));
    assert!(html.contains("<li>❌ Too short</li>"));
}

#[tokio::test]
async fn assess_once_with_empty_value_stays_hidden() {
    let service = ScriptedService::new();
    let mut pipeline = Pipeline::new(Arc::new(service), Session::default());

    let view = pipeline.assess_once("").await;
    assert_eq!(view.results(), &ResultsArea::Hidden);
}
