//! Title Cards
//!
//! One `ons-card` per grouping or quiz title.

use leptos::*;

/// A card per title; clicking one reports its title
#[component]
pub fn TitleCards(
    titles: Vec<String>,
    #[prop(into)]
    on_select: Callback<String>,
) -> impl IntoView {
    titles
        .into_iter()
        .map(|title| {
            let selected = title.clone();
            view! {
                <ons-card on:click=move |_| on_select.call(selected.clone())>
                    <div class="title card_title">{title}</div>
                </ons-card>
            }
        })
        .collect_view()
}
