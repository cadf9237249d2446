//! Submission and Score Formatting
//!
//! Checks a submission before it goes to the grading endpoint and turns the
//! grading response into the figures shown on the score page.

use serde::Serialize;

use crate::model::{CompletedQuizSubmission, GradeResult, QuizError, QuizResult};

/// Text for the inline-grading indicator on the quiz and score pages
pub fn inline_grading_label(inline_grading: bool) -> &'static str {
    if inline_grading {
        "Inline Grading: On"
    } else {
        "Inline Grading: Off"
    }
}

impl CompletedQuizSubmission {
    /// Reject submissions the grading endpoint would refuse
    pub fn validate(&self, prompt_count: usize) -> QuizResult<()> {
        if self.name.trim().is_empty() {
            return Err(QuizError::InvalidSubmission("quiz name is blank".to_string()));
        }
        if self.answers.is_empty() {
            return Err(QuizError::InvalidSubmission("no answers".to_string()));
        }
        if self.answers.len() != prompt_count {
            return Err(QuizError::InvalidSubmission(format!(
                "{} answers for {} prompts",
                self.answers.len(),
                prompt_count
            )));
        }
        if let Some(i) = self.answers.iter().position(|a| a.trim().is_empty()) {
            return Err(QuizError::InvalidSubmission(format!("answer {} is blank", i + 1)));
        }
        Ok(())
    }
}

impl GradeResult {
    /// Reject results that contradict themselves
    pub fn validate(&self) -> QuizResult<()> {
        if self.correct_answers > self.prompt_count {
            return Err(QuizError::InvalidResult(format!(
                "{} correct answers out of {} prompts",
                self.correct_answers, self.prompt_count
            )));
        }
        if self.percentage > 100 {
            return Err(QuizError::InvalidResult(format!(
                "percentage {} above 100",
                self.percentage
            )));
        }
        Ok(())
    }

    /// Elapsed time as shown on the score page, e.g. `"2 min 5 sec "`
    pub fn duration_text(&self) -> String {
        format_duration(self.time_minutes, self.time_seconds)
    }
}

/// Render elapsed time; zero or missing parts are left out
pub fn format_duration(minutes: Option<u32>, seconds: Option<u32>) -> String {
    let mut duration = String::new();
    if let Some(m) = minutes.filter(|m| *m >= 1) {
        duration.push_str(&format!("{} min ", m));
    }
    if let Some(s) = seconds.filter(|s| *s >= 1) {
        duration.push_str(&format!("{} sec ", s));
    }
    duration
}

/// Everything the score page displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub title: String,
    pub inline_grading: bool,
    pub correct_answers: u32,
    pub prompt_count: u32,
    pub percentage: u32,
    pub duration: String,
    pub graded_at: String,
}

impl ScoreReport {
    pub fn new(
        title: impl Into<String>,
        inline_grading: bool,
        result: &GradeResult,
        graded_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            inline_grading,
            correct_answers: result.correct_answers,
            prompt_count: result.prompt_count,
            percentage: result.percentage,
            duration: result.duration_text(),
            graded_at: graded_at.into(),
        }
    }

    /// Plain-text rendering for the terminal
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title));
        out.push_str(&format!("{}\n", inline_grading_label(self.inline_grading)));
        out.push_str(&format!("Graded:   {}\n", self.graded_at));
        out.push_str(&format!(
            "Score:    {} / {} ({}%)\n",
            self.correct_answers, self.prompt_count, self.percentage
        ));
        if !self.duration.is_empty() {
            out.push_str(&format!("Duration: {}\n", self.duration.trim_end()));
        }
        out
    }
}
