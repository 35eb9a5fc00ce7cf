use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{AnswerOption, OptionId, Question, QuestionDraft, QuestionId};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::vm::QuizIntent;
use crate::views::quiz::QuizTestHandles;
use crate::views::{ExitView, QuizView};

#[derive(Clone)]
struct TestApp {
    questions: Vec<Question>,
    exit_url: Option<String>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> String {
        "Quiz".to_string()
    }

    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn exit_url(&self) -> Option<String> {
        self.exit_url.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Exit,
    /// The application routes, starting at the quiz.
    Routed,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    match props.view {
        ViewKind::Routed => rsx! { Router::<Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Exit => rsx! { ExitView {} },
        ViewKind::Routed => rsx! {},
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Dispatch a quiz intent and let the DOM settle.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.quiz_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_question(id: u64, correct: &[&str]) -> Question {
    let opt = |raw: &str| OptionId::new(raw).expect("valid option id");
    QuestionDraft {
        id: QuestionId::new(id),
        title: format!("Question-0{id}"),
        body: "Which of the following statements is/are <strong>TRUE</strong>?".to_string(),
        options: vec![
            AnswerOption::new(opt("opt1"), "(A) RAW on R3 between I1 and I2"),
            AnswerOption::new(opt("opt2"), "(B) WAR on R3 between I1 and I3"),
        ],
        correct: correct.iter().map(|raw| opt(raw)).collect(),
        explanation: "Only (A) holds.".to_string(),
    }
    .validate()
    .expect("valid question")
}

pub fn setup_view_harness(
    view: ViewKind,
    questions: Vec<Question>,
    exit_url: Option<&str>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        questions,
        exit_url: exit_url.map(str::to_string),
    });

    let quiz_handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness { dom, quiz_handles }
}
