use std::sync::Arc;

use quiz_core::model::Question;

/// Capabilities the host application hands to the UI.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> String;
    fn questions(&self) -> Vec<Question>;

    /// Where to send the user when they go back past the first question.
    fn exit_url(&self) -> Option<String>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    questions: Arc<Vec<Question>>,
    exit_url: Option<String>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name(),
            questions: Arc::new(app.questions()),
            exit_url: app.exit_url(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Fresh copy of the question list for a new session.
    #[must_use]
    pub fn questions(&self) -> Vec<Question> {
        self.questions.as_ref().clone()
    }

    #[must_use]
    pub fn exit_url(&self) -> Option<&str> {
        self.exit_url.as_deref()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
