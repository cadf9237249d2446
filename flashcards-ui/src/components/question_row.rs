//! Question Rows
//!
//! One `ons-list-item#question-{i}` per prompt with its status icon and
//! answer input. The expected answer rides along as the `expected` attribute.
//! Children are an empty `label`, the prompt, then the `ons-input`, in the
//! order the list stylesheet targets.

use leptos::*;

use flashcards_quiz::{Prompt, PromptStatus};

/// Rows for every prompt, in quiz order
#[component]
pub fn QuestionList(
    prompts: Vec<Prompt>,
    #[prop(into)]
    statuses: Signal<Vec<PromptStatus>>,
    #[prop(into)]
    on_answer: Callback<(usize, String)>,
) -> impl IntoView {
    prompts
        .into_iter()
        .enumerate()
        .map(|(index, prompt)| {
            let status = Signal::derive(move || {
                statuses.with(|s| s.get(index).copied().unwrap_or_default())
            });
            view! { <QuestionRow index=index prompt=prompt status=status on_answer=on_answer /> }
        })
        .collect_view()
}

#[component]
fn QuestionRow(
    index: usize,
    prompt: Prompt,
    status: Signal<PromptStatus>,
    on_answer: Callback<(usize, String)>,
) -> impl IntoView {
    let name = index.to_string();
    let expected = prompt.answer;

    view! {
        <ons-list-item id=format!("question-{}", index)>
            <label class="center list-item__center"></label>
            <div class="left list-item__left">
                <ons-icon
                    class="list-item__icon ons-icon fa-square"
                    class:green=move || status.get().correct
                    icon=move || status.get().icon()
                ></ons-icon>
                <span class="prompt_count">{format!("{}) ", index + 1)}</span>
                <span>{prompt.question}</span>
            </div>
            <ons-input
                id=format!("input-{}", index)
                class="center"
                placeholder="Answer"
                expected=expected.clone()
                required="true"
                name=name.clone()
                on:input=move |ev| on_answer.call((index, event_target_value(&ev)))
            >
                <input
                    class="text-input"
                    type="text"
                    placeholder="Answer"
                    expected=expected
                    required="true"
                    name=name
                />
                <span class="text-input__label">"Answer"</span>
            </ons-input>
        </ons-list-item>
    }
}
