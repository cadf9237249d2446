//! Quiz Groupings Page
//!
//! One card per section of the grouping index.

use leptos::*;

use flashcards_quiz::QuizGroupingIndex;

use crate::components::TitleCards;
use crate::dom;
use crate::state::QuizContext;

/// Fetch the grouping index and render its sections
pub fn load(ctx: QuizContext) {
    spawn_local(async move {
        match ctx.refresh_groupings().await {
            Ok(index) => render(ctx, &index),
            Err(e) => dom::report_error(&e, "Error loading quiz groupings."),
        }
    });
}

fn render(ctx: QuizContext, index: &QuizGroupingIndex) {
    let Some(parent) = dom::intro_parent(dom::GROUPING_LIST_INTRO) else {
        dom::log("Quiz grouping list not found");
        return;
    };

    let sections: Vec<String> = index.section_names().map(str::to_string).collect();
    mount_to(parent, move || {
        let on_select = move |group: String| {
            ctx.session.borrow_mut().select_group(group);
            dom::push_page(dom::QUIZ_LIST_PAGE);
        };
        view! { <TitleCards titles=sections on_select=on_select /> }
    });
}
