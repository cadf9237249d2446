//! Quiz Session State
//!
//! The per-session state a quiz page controller works with: the cached
//! grouping index, the selected group and title, the loaded quiz, and the
//! in-progress answers. State is replaced wholesale on each successful load
//! and left untouched when a request fails.

use crate::client::QuizApi;
use crate::model::{
    CompletedQuizSubmission, GradeResult, Quiz, QuizError, QuizGroupingIndex, QuizResult,
};
use crate::progress::{self, ProgressSnapshot};

/// State shared by the grouping, quiz list, quiz, and score views
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    groupings: Option<QuizGroupingIndex>,
    selected_group: Option<String>,
    selected_title: Option<String>,
    quiz: Option<Quiz>,
    answers: Vec<String>,
    inline_grading: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Selection ============

    pub fn select_group(&mut self, group: impl Into<String>) {
        self.selected_group = Some(group.into());
    }

    pub fn selected_group(&self) -> Option<&str> {
        self.selected_group.as_deref()
    }

    pub fn select_title(&mut self, title: impl Into<String>) {
        self.selected_title = Some(title.into());
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.selected_title.as_deref()
    }

    pub fn set_inline_grading(&mut self, inline_grading: bool) {
        self.inline_grading = inline_grading;
    }

    pub fn inline_grading(&self) -> bool {
        self.inline_grading
    }

    // ============ Groupings ============

    /// Cached grouping index, if one has been fetched
    pub fn groupings(&self) -> Option<&QuizGroupingIndex> {
        self.groupings.as_ref()
    }

    pub fn set_groupings(&mut self, index: QuizGroupingIndex) {
        self.groupings = Some(index);
    }

    /// Titles of the selected group from the cached index
    pub fn selected_titles(&self) -> QuizResult<Vec<String>> {
        let group = self
            .selected_group
            .as_deref()
            .ok_or_else(|| QuizError::UnknownGroup(String::new()))?;
        let index = self
            .groupings
            .as_ref()
            .ok_or_else(|| QuizError::UnknownGroup(group.to_string()))?;
        index
            .titles(group)
            .map(<[String]>::to_vec)
            .ok_or_else(|| QuizError::UnknownGroup(group.to_string()))
    }

    /// Fetch the grouping index, replacing the cached one on success
    pub async fn load_groupings<A: QuizApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> QuizResult<&QuizGroupingIndex> {
        let index = api.fetch_groupings().await?;
        tracing::info!(sections = index.len(), "Loaded quiz groupings");
        Ok(self.groupings.insert(index))
    }

    /// Titles of the selected group, fetching the index only when none is cached
    pub async fn load_quiz_list<A: QuizApi + ?Sized>(&mut self, api: &A) -> QuizResult<Vec<String>> {
        if self.groupings.is_none() {
            tracing::debug!("No cached groupings, fetching");
            self.load_groupings(api).await?;
        }
        self.selected_titles()
    }

    // ============ Quiz ============

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    /// Install a freshly fetched quiz and clear the answers
    pub fn set_quiz(&mut self, quiz: Quiz) {
        self.answers = vec![String::new(); quiz.prompt_count()];
        self.quiz = Some(quiz);
    }

    /// Fetch the selected quiz
    pub async fn load_quiz<A: QuizApi + ?Sized>(&mut self, api: &A) -> QuizResult<&Quiz> {
        let title = self
            .selected_title
            .clone()
            .ok_or(QuizError::NoQuizLoaded)?;
        let quiz = api.fetch_quiz(&title).await?;
        tracing::info!(title = %title, id = %quiz.id, prompts = quiz.prompt_count(), "Loaded quiz");
        self.set_quiz(quiz);
        self.quiz.as_ref().ok_or(QuizError::NoQuizLoaded)
    }

    // ============ Answers ============

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Record the text of one input and recompute progress
    pub fn record_answer(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> QuizResult<ProgressSnapshot> {
        let count = self.quiz.as_ref().ok_or(QuizError::NoQuizLoaded)?.prompt_count();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(QuizError::PromptOutOfRange { index, count })?;
        *slot = value.into();
        self.progress()
    }

    /// Progress for the current answers
    pub fn progress(&self) -> QuizResult<ProgressSnapshot> {
        let quiz = self.quiz.as_ref().ok_or(QuizError::NoQuizLoaded)?;
        Ok(progress::evaluate(&quiz.prompts, &self.answers, self.inline_grading))
    }

    // ============ Submission ============

    /// Build the submission from the current answers
    pub fn build_submission(&self) -> QuizResult<CompletedQuizSubmission> {
        let quiz = self.quiz.as_ref().ok_or(QuizError::NoQuizLoaded)?;
        let name = self
            .selected_title
            .clone()
            .or_else(|| quiz.name.clone())
            .unwrap_or_default();

        let submission = CompletedQuizSubmission {
            name,
            inline_grading: self.inline_grading,
            answers: self.answers.clone(),
        };
        submission.validate(quiz.prompt_count())?;
        tracing::debug!(?submission, "Built completed quiz");
        Ok(submission)
    }

    /// Submit the current answers for grading
    pub async fn submit<A: QuizApi + ?Sized>(&self, api: &A) -> QuizResult<GradeResult> {
        let submission = self.build_submission()?;
        let quiz = self.quiz.as_ref().ok_or(QuizError::NoQuizLoaded)?;

        let result = api.submit_quiz(&submission.name, &quiz.id, &submission).await?;
        result.validate()?;
        tracing::info!(
            correct = result.correct_answers,
            total = result.prompt_count,
            percentage = result.percentage,
            "Quiz graded"
        );
        Ok(result)
    }
}
