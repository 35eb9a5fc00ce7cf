use thiserror::Error;

use crate::grading::GradeError;
use crate::model::QuestionError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Grade(#[from] GradeError),
}
