//! Progress Tracker
//!
//! Recomputes per-prompt status and the aggregate progress figures from the
//! current answers. Run after every keystroke; it holds no state of its own.

use serde::Serialize;

use crate::model::Prompt;

/// Icon shown next to an answered prompt
pub const ICON_ANSWERED: &str = "fa-check, ion:ion-checkbox, material:md-check_box";

/// Icon shown next to an unanswered prompt
pub const ICON_UNANSWERED: &str = "fa-square, ion:ion-square, material:md-check_box_outline_blank";

/// Class added to the icon of a correct answer under inline grading
pub const CORRECT_CLASS: &str = "green";

/// Derived state of one prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PromptStatus {
    /// The input is non-empty
    pub answered: bool,
    /// The input equals the expected answer; always false without inline grading
    pub correct: bool,
}

impl PromptStatus {
    pub fn icon(&self) -> &'static str {
        if self.answered {
            ICON_ANSWERED
        } else {
            ICON_UNANSWERED
        }
    }
}

/// Snapshot of the whole quiz after one input event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub statuses: Vec<PromptStatus>,
    pub prompt_count: usize,
    pub answered_count: usize,
    pub correct_count: usize,
    /// `correct_count * 100 / prompt_count`; drives the progress bar
    pub progress_percent: f64,
    /// `answered_count * 100 / prompt_count`; gates the submit button
    pub answered_percent: f64,
    pub inline_grading: bool,
}

impl ProgressSnapshot {
    /// Submit is allowed once every prompt has an answer
    pub fn submit_enabled(&self) -> bool {
        self.prompt_count > 0 && self.answered_count == self.prompt_count
    }

    /// One-line summary for terminal output
    pub fn summary(&self) -> String {
        if self.inline_grading {
            format!(
                "{}/{} answered, {}/{} correct ({:.0}%)",
                self.answered_count,
                self.prompt_count,
                self.correct_count,
                self.prompt_count,
                self.progress_percent
            )
        } else {
            format!("{}/{} answered", self.answered_count, self.prompt_count)
        }
    }
}

/// Evaluate answers against prompts
///
/// `answers` is aligned positionally with `prompts`; missing entries count as
/// empty. Correctness is exact string equality and is only computed when
/// `inline_grading` is on.
pub fn evaluate(prompts: &[Prompt], answers: &[String], inline_grading: bool) -> ProgressSnapshot {
    let statuses: Vec<PromptStatus> = prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| {
            let answer = answers.get(i).map(String::as_str).unwrap_or("");
            PromptStatus {
                answered: !answer.is_empty(),
                correct: inline_grading && answer == prompt.answer,
            }
        })
        .collect();

    let prompt_count = statuses.len();
    let answered_count = statuses.iter().filter(|s| s.answered).count();
    let correct_count = statuses.iter().filter(|s| s.correct).count();

    ProgressSnapshot {
        statuses,
        prompt_count,
        answered_count,
        correct_count,
        progress_percent: percent(correct_count, prompt_count),
        answered_percent: percent(answered_count, prompt_count),
        inline_grading,
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts() -> Vec<Prompt> {
        vec![
            Prompt::new("rojo", "red"),
            Prompt::new("azul", "blue"),
            Prompt::new("verde", "green"),
            Prompt::new("negro", "black"),
        ]
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inline_grading_progress() {
        let snapshot = evaluate(&prompts(), &answers(&["red", "blu", "green", ""]), true);

        assert_eq!(snapshot.answered_count, 3);
        assert_eq!(snapshot.correct_count, 2);
        assert_eq!(snapshot.progress_percent, 50.0);
        assert_eq!(snapshot.answered_percent, 75.0);
        assert!(!snapshot.submit_enabled());

        assert!(snapshot.statuses[0].correct);
        assert!(snapshot.statuses[1].answered);
        assert!(!snapshot.statuses[1].correct);
        assert!(!snapshot.statuses[3].answered);
    }

    #[test]
    fn test_submit_enabled_only_when_all_answered() {
        let snapshot = evaluate(&prompts(), &answers(&["x", "y", "z", "w"]), true);
        assert_eq!(snapshot.answered_percent, 100.0);
        assert!(snapshot.submit_enabled());
        assert_eq!(snapshot.progress_percent, 0.0);
    }

    #[test]
    fn test_submit_disabled_with_one_blank_in_large_quiz() {
        let prompts: Vec<Prompt> = (0..101)
            .map(|i| Prompt::new(format!("q{}", i), format!("a{}", i)))
            .collect();
        let mut values: Vec<String> = (0..100).map(|i| format!("a{}", i)).collect();
        values.push(String::new());

        let snapshot = evaluate(&prompts, &values, false);
        assert_eq!(snapshot.answered_count, 100);
        assert!(snapshot.answered_percent > 99.0);
        assert!(!snapshot.submit_enabled());

        values[100] = "a100".to_string();
        assert!(evaluate(&prompts, &values, false).submit_enabled());
    }

    #[test]
    fn test_without_inline_grading_nothing_is_correct() {
        let snapshot = evaluate(&prompts(), &answers(&["red", "blue", "green", "black"]), false);

        assert_eq!(snapshot.correct_count, 0);
        assert_eq!(snapshot.progress_percent, 0.0);
        assert!(snapshot.statuses.iter().all(|s| !s.correct));
        assert!(snapshot.submit_enabled());
        assert_eq!(snapshot.summary(), "4/4 answered");
    }

    #[test]
    fn test_correctness_is_exact_match() {
        let snapshot = evaluate(&prompts(), &answers(&["Red", "blue ", "green", "black"]), true);
        assert!(!snapshot.statuses[0].correct);
        assert!(!snapshot.statuses[1].correct);
        assert_eq!(snapshot.correct_count, 2);
    }

    #[test]
    fn test_missing_answers_count_as_empty() {
        let snapshot = evaluate(&prompts(), &answers(&["red"]), true);
        assert_eq!(snapshot.statuses.len(), 4);
        assert_eq!(snapshot.answered_count, 1);
        assert_eq!(snapshot.progress_percent, 25.0);
    }

    #[test]
    fn test_zero_prompts() {
        let snapshot = evaluate(&[], &[], true);
        assert_eq!(snapshot.progress_percent, 0.0);
        assert_eq!(snapshot.answered_percent, 0.0);
        assert!(!snapshot.submit_enabled());
    }

    #[test]
    fn test_fractional_percent() {
        let three = &prompts()[..3];
        let snapshot = evaluate(three, &answers(&["red", "", ""]), true);
        assert!((snapshot.progress_percent - 33.333_333).abs() < 1e-4);
        assert_eq!(snapshot.summary(), "1/3 answered, 1/3 correct (33%)");
    }

    #[test]
    fn test_icons() {
        let answered = PromptStatus { answered: true, correct: false };
        assert_eq!(answered.icon(), ICON_ANSWERED);
        assert_eq!(PromptStatus::default().icon(), ICON_UNANSWERED);
    }
}
