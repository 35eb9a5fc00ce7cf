use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tokio::sync::watch;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{OptionVm, QuizIntent, QuizOutcome, start_quiz, timer_label, watch_ticks};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use super::ViewError;
#[cfg(test)]
use crate::vm::QuizVm;

/// Keyboard shortcuts: arrows navigate, Enter submits.
pub(crate) fn intent_for_key(key: &Key) -> Option<QuizIntent> {
    match key {
        Key::ArrowLeft => Some(QuizIntent::Previous),
        Key::ArrowRight => Some(QuizIntent::Next),
        Key::Enter => Some(QuizIntent::Submit),
        _ => None,
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let ticks = use_hook(|| watch::channel(0_u64));
    let mut elapsed = use_signal(|| 0_u64);
    let mut vm = use_signal({
        let questions = ctx.questions();
        let tx = ticks.0.clone();
        move || start_quiz(questions, watch_ticks(tx))
    });

    let tick_rx = ticks.1.clone();
    use_future(move || {
        let mut rx = tick_rx.clone();
        async move {
            let mut elapsed = elapsed;
            while rx.changed().await.is_ok() {
                let secs = *rx.borrow_and_update();
                elapsed.set(secs);
            }
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let outcome = match vm.write().as_mut() {
            Ok(quiz) => {
                let outcome = quiz.dispatch(intent);
                // The timer restarts silently on navigation; show the reset right away.
                elapsed.set(quiz.elapsed_secs());
                outcome
            }
            Err(_) => return,
        };
        if outcome == QuizOutcome::ExitRequested {
            let _ = navigator.push(Route::Exit {});
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Some(intent) = intent_for_key(&evt.data.key()) else {
            return;
        };
        evt.prevent_default();
        dispatch.call(intent);
    });

    let vm_guard = vm.read();
    let quiz = match vm_guard.as_ref() {
        Ok(quiz) => quiz,
        Err(err) => {
            return rsx! {
                div { class: "page quiz-page",
                    p { class: "quiz-error", "{err.message()}" }
                }
            };
        }
    };

    let title = quiz.title().to_string();
    let body_html = quiz.body_html();
    let options = quiz.options();
    let feedback = quiz.feedback();
    let time_taken = quiz.time_taken_label();
    let explanation_html = quiz.explanation_html();
    let notice = quiz.notice();
    let progress = quiz.progress();
    drop(vm_guard);

    let progress_label = format!("{} / {}", progress.position, progress.total);
    let clock_label = timer_label(elapsed());

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            header { class: "quiz-header",
                h2 { class: "quiz-title", id: "question-title", "{title}" }
                span { class: "quiz-progress", "{progress_label}" }
                span { class: "quiz-timer", id: "timeDisplay", "{clock_label}" }
            }
            section { class: "question-box", id: "question-box",
                div { class: "question-text", dangerous_inner_html: "{body_html}" }
                for option in options.iter() {
                    OptionRow { key: "{option.id}", option: option.clone(), on_intent: dispatch }
                }
                div { class: "quiz-submit",
                    button {
                        class: "btn btn-primary",
                        id: "submitBtn",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Submit),
                        "Submit"
                    }
                }
                if let Some(feedback) = feedback {
                    p { class: "{feedback.class}", id: "feedback", "{feedback.text}" }
                }
                if let Some(label) = time_taken {
                    p { class: "time-taken", id: "timeTaken", "{label}" }
                }
            }
            if let Some(html) = explanation_html {
                section { class: "explanation", id: "explanation",
                    strong { "Explanation:" }
                    div { class: "explanation-text", dangerous_inner_html: "{html}" }
                }
            }
            nav { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    id: "prevBtn",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Previous),
                    "Previous"
                }
                button {
                    class: "btn btn-info",
                    id: "explainBtn",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::RevealExplanation),
                    "Show Explanation"
                }
                button {
                    class: "btn btn-secondary",
                    id: "nextBtn",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Next),
                    "Next"
                }
            }
            if let Some(message) = notice {
                div { class: "notice-overlay",
                    div {
                        class: "notice",
                        role: "alertdialog",
                        aria_modal: "true",
                        p { "{message}" }
                        button {
                            class: "btn btn-primary",
                            id: "notice-dismiss",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::DismissNotice),
                            "OK"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OptionRow(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let toggle_id = option.id.clone();

    rsx! {
        div { class: "{option.row_class}",
            input {
                class: "form-check-input",
                r#type: "checkbox",
                id: "{option.id}",
                checked: option.selected,
                onchange: move |_| on_intent.call(QuizIntent::Toggle(toggle_id.clone())),
            }
            label { class: "form-check-label", r#for: "{option.id}", "{option.text}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Result<QuizVm, ViewError>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<Result<QuizVm, ViewError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Result<QuizVm, ViewError>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
