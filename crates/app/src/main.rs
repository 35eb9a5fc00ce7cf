use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuestionStore;
use quiz_core::model::Question;
use services::{CatalogError, load_questions_file, parse_questions};
use ui::{App, UiApp, build_app_context};

const DEFAULT_EXIT_URL: &str = "https://shyam044.github.io/gate-questions/";
const BUILTIN_QUESTIONS: &str = include_str!("../assets/questions.json");

#[derive(Parser, Debug)]
#[command(name = "quiz", version, about = "Timed multiple-select quiz")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    ui: UiArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the desktop quiz (default).
    Ui(UiArgs),
    /// Validate a question file and print a summary.
    Check {
        /// JSON question file to validate.
        #[arg(long, env = "QUIZ_QUESTIONS")]
        questions: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct UiArgs {
    /// JSON question file; the built-in questions are used when absent.
    #[arg(long, env = "QUIZ_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Where "Previous" on the first question leads.
    #[arg(long, env = "QUIZ_EXIT_URL", default_value = DEFAULT_EXIT_URL)]
    exit_url: String,
}

struct DesktopApp {
    questions: Vec<Question>,
    exit_url: String,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> String {
        "GATE Practice".to_string()
    }

    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn exit_url(&self) -> Option<String> {
        Some(self.exit_url.clone())
    }
}

fn load_questions(path: Option<&Path>) -> Result<Vec<Question>, CatalogError> {
    match path {
        Some(path) => load_questions_file(path),
        None => parse_questions(BUILTIN_QUESTIONS),
    }
}

fn launch_ui(args: UiArgs) -> Result<(), Box<dyn std::error::Error>> {
    let questions = load_questions(args.questions.as_deref())?;
    // Surface an empty or duplicated list here instead of inside the window.
    QuestionStore::load(questions.clone())?;
    tracing::info!(count = questions.len(), exit_url = %args.exit_url, "launching quiz");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questions,
        exit_url: args.exit_url,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("GATE Practice")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let questions = load_questions_file(path)?;
    let store = QuestionStore::load(questions)?;
    println!("{}: {} question(s)", path.display(), store.len());
    for question in store.iter() {
        println!(
            "  #{} {} ({} options, {} correct)",
            question.id(),
            question.title(),
            question.options().len(),
            question.correct().len()
        );
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "app=info,services=info,ui=info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Check { questions }) => check(&questions),
        Some(Command::Ui(args)) => launch_ui(args),
        None => launch_ui(cli.ui),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
