//! Quiz Server Clients
//!
//! `QuizApi` is the seam between the session logic and the transport. The
//! native client uses reqwest; the browser crate implements the same trait
//! over `fetch`. Futures are not required to be `Send` so both fit.

#[cfg(feature = "http-client")]
mod http;

#[cfg(feature = "http-client")]
pub use http::QuizClient;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{CompletedQuizSubmission, GradeResult, Quiz, QuizGroupingIndex, QuizResult};

/// Operations the quiz server exposes
#[async_trait(?Send)]
pub trait QuizApi {
    /// Fetch the section → quiz titles index
    async fn fetch_groupings(&self) -> QuizResult<QuizGroupingIndex>;

    /// Fetch one quiz by title
    async fn fetch_quiz(&self, title: &str) -> QuizResult<Quiz>;

    /// Send answers for grading
    async fn submit_quiz(
        &self,
        title: &str,
        quiz_id: &Uuid,
        submission: &CompletedQuizSubmission,
    ) -> QuizResult<GradeResult>;
}
