//! Domain error types.
//!
//! Scoring, quiz, career and portfolio operations fail with these. File and
//! parse errors go through `anyhow` with context instead.

use thiserror::Error;

/// Errors raised by the scoring, quiz and portfolio logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An answer selected an option outside the question's range.
    #[error("invalid answer for question {question}: option {option} is outside 0..={max}")]
    InvalidInput { question: usize, option: u8, max: u8 },

    /// `next` was called before an option was selected.
    #[error("no option selected for the current question")]
    NoSelection,

    /// The quiz has already been completed; restart it first.
    #[error("quiz already completed")]
    QuizFinished,

    /// A quiz needs at least one question.
    #[error("quiz has no questions")]
    EmptyQuiz,

    /// No career with the given id exists in the catalog.
    #[error("unknown career: {0}")]
    UnknownCareer(String),

    /// No portfolio project, experience or education entry has this id.
    #[error("unknown portfolio entry: {0}")]
    UnknownEntry(String),

    /// A multiple-choice answer that is not one of the question's options.
    #[error("invalid choice for portfolio question {question}: {answer}")]
    InvalidChoice { question: u32, answer: String },
}

impl CoreError {
    /// Returns `true` if this error was caused by the caller's input rather
    /// than by the state of a quiz session.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidInput { .. }
                | CoreError::UnknownCareer(_)
                | CoreError::UnknownEntry(_)
                | CoreError::InvalidChoice { .. }
        )
    }
}
