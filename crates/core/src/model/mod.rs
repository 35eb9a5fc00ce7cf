mod ids;
mod question;
mod session;

pub use ids::{OptionId, ParseIdError, QuestionId};
pub use question::{AnswerOption, Question, QuestionDraft, QuestionError};
pub use session::SessionState;
