//! Quiz List Page
//!
//! One card per quiz title in the selected group. The cached grouping index
//! is used when present; otherwise it is fetched first.

use leptos::*;

use crate::components::TitleCards;
use crate::dom;
use crate::state::QuizContext;

pub fn load(ctx: QuizContext) {
    spawn_local(async move {
        match ctx.quiz_list().await {
            Ok(titles) => render(ctx, titles),
            Err(e) => dom::report_error(&e, "Error loading quiz list."),
        }
    });
}

fn render(ctx: QuizContext, titles: Vec<String>) {
    let Some(parent) = dom::intro_parent(dom::QUIZ_LIST_INTRO) else {
        dom::log("Quiz list not found");
        return;
    };

    mount_to(parent, move || {
        let on_select = move |title: String| {
            ctx.session.borrow_mut().select_title(title);
            dom::push_page(dom::QUIZ_PAGE);
        };
        view! { <TitleCards titles=titles on_select=on_select /> }
    });
}
