mod exit;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exit::ExitView;
pub use quiz::QuizView;
pub use state::ViewError;
