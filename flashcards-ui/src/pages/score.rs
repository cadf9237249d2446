//! Score Page
//!
//! Submits the current answers and shows the graded result.

use leptos::*;

use flashcards_quiz::{inline_grading_label, GradeResult};

use crate::dom;
use crate::state::QuizContext;

pub fn load(ctx: QuizContext) {
    let inline = dom::inline_grading_enabled();
    let title = ctx
        .session
        .borrow()
        .selected_title()
        .unwrap_or_default()
        .to_string();

    dom::set_text_by_selector(dom::SCORE_TOOLBAR_TITLE, &title);
    dom::set_text_by_id(dom::INLINE_GRADING_DISPLAY_SCORE, inline_grading_label(inline));

    spawn_local(async move {
        dom::log(&format!("Submitting quiz: {}", title));
        match ctx.score(inline).await {
            Ok(result) => render(&result),
            Err(e) => dom::report_error(&e, "Error scoring quiz."),
        }
    });
}

fn render(result: &GradeResult) {
    dom::set_text_by_id(dom::SCORE_DATETIME, &dom::now_locale_string());
    dom::set_text_by_id(dom::SCORE_CORRECT, &result.correct_answers.to_string());
    dom::set_text_by_id(dom::SCORE_TOTAL, &result.prompt_count.to_string());
    dom::set_text_by_id(dom::SCORE_PERCENTAGE, &result.percentage.to_string());
    dom::set_text_by_id(dom::SCORE_DURATION, &result.duration_text());
}
