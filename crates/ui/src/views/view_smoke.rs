use dioxus::prelude::{Key, ReadableExt};

use super::quiz::intent_for_key;
use super::test_harness::{ViewKind, sample_question, setup_view_harness};
use crate::vm::{NO_SELECTION_NOTICE, QuizIntent};

fn key_intent(key: Key) -> QuizIntent {
    intent_for_key(&key).expect("shortcut key")
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let questions = vec![sample_question(1, &["opt1"]), sample_question(2, &["opt2"])];
    let mut harness = setup_view_harness(ViewKind::Quiz, questions, None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Question-01"), "missing title in {html}");
    assert!(html.contains("<strong>TRUE</strong>"), "missing body html in {html}");
    assert!(html.contains("(A) RAW on R3 between I1 and I2"), "missing option in {html}");
    assert!(html.contains("Time: 0 sec"), "missing timer in {html}");
    assert!(html.contains("1 / 2"), "missing progress in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(!html.contains("Explanation:"), "explanation shown early in {html}");
    assert!(!html.contains("feedback"), "feedback shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Quiz, Vec::new(), None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("No questions available yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exit_view_smoke_renders_exit_link() {
    let mut harness = setup_view_harness(
        ViewKind::Exit,
        vec![sample_question(1, &["opt1"])],
        Some("https://example.com/more-questions/"),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("https://example.com/more-questions/"),
        "missing exit link in {html}"
    );
    assert!(html.contains("Back to the first question"), "missing back link in {html}");
}

#[test]
fn shortcut_keys_map_to_intents() {
    assert_eq!(intent_for_key(&Key::ArrowLeft), Some(QuizIntent::Previous));
    assert_eq!(intent_for_key(&Key::ArrowRight), Some(QuizIntent::Next));
    assert_eq!(intent_for_key(&Key::Enter), Some(QuizIntent::Submit));
    assert_eq!(intent_for_key(&Key::Escape), None);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shortcuts_drive_the_session() {
    let questions = vec![sample_question(1, &["opt1"]), sample_question(2, &["opt2"])];
    let mut harness = setup_view_harness(ViewKind::Quiz, questions, None);
    harness.rebuild();

    harness.dispatch(key_intent(Key::Enter));
    let html = harness.render();
    assert!(html.contains(NO_SELECTION_NOTICE), "missing notice in {html}");

    harness.dispatch(QuizIntent::DismissNotice);
    harness.dispatch(key_intent(Key::ArrowRight));
    let html = harness.render();
    assert!(html.contains("Question-02"), "next did not move in {html}");
    assert!(html.contains("2 / 2"), "missing progress in {html}");

    harness.dispatch(key_intent(Key::ArrowLeft));
    let html = harness.render();
    assert!(html.contains("Question-01"), "previous did not move in {html}");

    let vm = harness.quiz_handles.vm();
    let position = harness
        .dom
        .in_runtime(|| vm.read().as_ref().ok().map(|quiz| quiz.progress().position));
    assert_eq!(position, Some(1));
}

#[tokio::test(flavor = "current_thread")]
async fn previous_on_first_question_routes_to_exit() {
    let mut harness = setup_view_harness(
        ViewKind::Routed,
        vec![sample_question(1, &["opt1"]), sample_question(2, &["opt2"])],
        Some("https://example.com/more-questions/"),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question-01"), "quiz not at root route in {html}");

    harness.dispatch(key_intent(Key::ArrowLeft));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("You left the quiz"), "exit view not shown in {html}");
    assert!(
        html.contains("https://example.com/more-questions/"),
        "missing exit link in {html}"
    );
    assert!(!html.contains("question-box"), "quiz still rendered in {html}");
}
