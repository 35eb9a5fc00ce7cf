//! Question files: a JSON array of question drafts.
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Question-01",
//!     "body": "Which of the following is/are TRUE?",
//!     "options": [{ "id": "opt1", "text": "(A) ..." }],
//!     "correct": ["opt1"],
//!     "explanation": "..."
//!   }
//! ]
//! ```

use std::path::Path;

use quiz_core::model::{Question, QuestionDraft};

use crate::error::CatalogError;

/// Decode and validate a question list.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed JSON and `CatalogError::Invalid`
/// for the first question that breaks the answer-key rules.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, CatalogError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .validate()
                .map_err(|source| CatalogError::Invalid { index, source })
        })
        .collect()
}

/// Read a question file from disk.
///
/// # Errors
///
/// Returns `CatalogError::Io` when the file cannot be read, otherwise the same
/// errors as [`parse_questions`].
pub fn load_questions_file(path: &Path) -> Result<Vec<Question>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(&raw)?;
    tracing::info!(path = %path.display(), count = questions.len(), "loaded question file");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionError, QuestionId};

    const TWO_QUESTIONS: &str = r#"[
        {
            "id": 1,
            "title": "Question-01",
            "questionText": "Pick the RAW hazards",
            "options": [
                { "id": "opt1", "text": "(A)" },
                { "id": "opt2", "text": "(B)" }
            ],
            "correct": ["opt1"],
            "explanation": "Only (A)."
        },
        {
            "id": 2,
            "title": "Question-02",
            "body": "Pick both",
            "options": [
                { "id": "a", "text": "(A)" },
                { "id": "b", "text": "(B)" }
            ],
            "correct": ["a", "b"]
        }
    ]"#;

    #[test]
    fn parses_body_alias_and_default_explanation() {
        let questions = parse_questions(TWO_QUESTIONS).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].body(), "Pick the RAW hazards");
        assert_eq!(questions[1].id(), QuestionId::new(2));
        assert_eq!(questions[1].correct().len(), 2);
        assert_eq!(questions[1].explanation(), "");
    }

    #[test]
    fn reports_index_of_invalid_question() {
        let json = r#"[
            { "id": 1, "title": "ok", "body": "b",
              "options": [{ "id": "x", "text": "X" }], "correct": ["x"] },
            { "id": 2, "title": "bad", "body": "b",
              "options": [{ "id": "x", "text": "X" }], "correct": [] }
        ]"#;
        let err = parse_questions(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Invalid {
                index: 1,
                source: QuestionError::EmptyCorrectSet
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_questions("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_questions_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("quiz-catalog-{}.json", std::process::id()));
        std::fs::write(&path, TWO_QUESTIONS).unwrap();
        let questions = load_questions_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(questions.len(), 2);
    }
}
