//! Quiz Page
//!
//! Question rows for the selected quiz, with progress recomputed on every
//! keystroke.

use leptos::*;

use flashcards_quiz::{inline_grading_label, Prompt, PromptStatus};

use crate::components::QuestionList;
use crate::dom;
use crate::state::QuizContext;

pub fn load(ctx: QuizContext) {
    let title = ctx
        .session
        .borrow()
        .selected_title()
        .unwrap_or_default()
        .to_string();
    dom::set_text_by_selector(dom::QUIZ_TOOLBAR_TITLE, &title);

    let inline = dom::inline_grading_enabled();
    ctx.session.borrow_mut().set_inline_grading(inline);
    dom::set_text_by_id(dom::INLINE_GRADING_DISPLAY_QUIZ, inline_grading_label(inline));

    spawn_local(async move {
        dom::log(&format!("Retrieving quiz: {}", title));
        match ctx.open_quiz().await {
            Ok(prompts) => render(ctx, prompts),
            Err(e) => dom::report_error(&e, "Error retrieving quiz."),
        }
    });
}

fn render(ctx: QuizContext, prompts: Vec<Prompt>) {
    let Some(parent) = dom::html_element_by_id(dom::QUESTION_LIST) else {
        dom::log("Question list not found");
        return;
    };

    mount_to(parent, move || {
        let statuses = create_rw_signal(vec![PromptStatus::default(); prompts.len()]);

        let on_answer = move |(index, value): (usize, String)| {
            match ctx.answer(index, value, dom::inline_grading_enabled()) {
                Ok(snapshot) => {
                    dom::apply_progress(&snapshot);
                    statuses.set(snapshot.statuses);
                }
                Err(e) => web_sys::console::error_1(&format!("Error: {}", e).into()),
            }
        };

        view! { <QuestionList prompts=prompts statuses=statuses on_answer=on_answer /> }
    });
}
