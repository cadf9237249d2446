//! Quiz Data Model
//!
//! - **types**: Wire types (grouping index, quiz, submission, grade result)
//! - **error**: Error types shared by every layer of the client

mod error;
mod types;

pub use error::{QuizError, QuizResult};
pub use types::{
    ApiErrorBody, CompletedQuizSubmission, GradeResult, Prompt, Quiz, QuizGrouping,
    QuizGroupingIndex,
};
