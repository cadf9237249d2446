//! DOM helpers
//!
//! Lookups for the template elements the pages write into, and the calls
//! out to the Onsen navigator and toast.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement};

use flashcards_quiz::ProgressSnapshot;

// Template element ids and selectors
pub const NAVIGATOR: &str = "#myNavigator";
pub const GROUPING_LIST_INTRO: &str = "#quiz-grouping-list .intro";
pub const QUIZ_LIST_INTRO: &str = "#home-quiz-list .intro";
pub const QUESTION_LIST: &str = "question-list";
pub const QUIZ_TOOLBAR_TITLE: &str = "#forms-page .toolbar__title";
pub const SCORE_TOOLBAR_TITLE: &str = "#score-page .toolbar__title";
pub const INLINE_GRADING_CHECKBOX: &str = "grade-quiz-inline";
pub const INLINE_GRADING_DISPLAY_QUIZ: &str = "inline-grading-display-quiz";
pub const INLINE_GRADING_DISPLAY_SCORE: &str = "inline-grading-display-score";
pub const QUIZ_PROGRESS: &str = "quiz-progress";
pub const QUIZ_SUBMIT: &str = "quiz-submit";
pub const SCORE_DATETIME: &str = "datetime";
pub const SCORE_CORRECT: &str = "correctAnswers";
pub const SCORE_TOTAL: &str = "totalPrompts";
pub const SCORE_PERCENTAGE: &str = "percentage";
pub const SCORE_DURATION: &str = "duration";

// Navigator pages
pub const QUIZ_LIST_PAGE: &str = "quiz-list.html";
pub const QUIZ_PAGE: &str = "quiz.html";

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|doc| doc.query_selector(selector).ok().flatten())
}

/// Parent of the `.intro` element in a list page; cards are appended there
pub fn intro_parent(selector: &str) -> Option<HtmlElement> {
    query(selector)
        .and_then(|intro| intro.parent_element())
        .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_text_by_id(id: &str, text: &str) {
    match element_by_id(id) {
        Some(el) => el.set_text_content(Some(text)),
        None => log(&format!("Missing element #{}", id)),
    }
}

pub fn set_text_by_selector(selector: &str, text: &str) {
    match query(selector) {
        Some(el) => el.set_text_content(Some(text)),
        None => log(&format!("Missing element {}", selector)),
    }
}

/// State of the inline-grading checkbox (an `ons-checkbox` or plain input)
pub fn inline_grading_enabled() -> bool {
    element_by_id(INLINE_GRADING_CHECKBOX)
        .and_then(|el| Reflect::get(&el, &"checked".into()).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Write the progress bar value and toggle the submit button
pub fn apply_progress(snapshot: &ProgressSnapshot) {
    if let Some(bar) = element_by_id(QUIZ_PROGRESS) {
        let _ = bar.set_attribute("value", &snapshot.progress_percent.to_string());
    }
    if let Some(submit) = element_by_id(QUIZ_SUBMIT) {
        if snapshot.submit_enabled() {
            let _ = submit.remove_attribute("disabled");
        } else {
            let _ = submit.set_attribute("disabled", "true");
        }
    }
}

/// Local date and time as the browser formats it
pub fn now_locale_string() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

/// Push a template on the Onsen navigator with `{data: {title: 'Quiz'}}`
pub fn push_page(page: &str) {
    let result = (|| -> Result<(), JsValue> {
        let navigator = query(NAVIGATOR).ok_or_else(|| JsValue::from_str("navigator not found"))?;
        let push: Function = Reflect::get(&navigator, &"pushPage".into())?.dyn_into()?;

        let data = Object::new();
        Reflect::set(&data, &"title".into(), &"Quiz".into())?;
        let options = Object::new();
        Reflect::set(&options, &"data".into(), &data)?;

        push.call2(&navigator, &page.into(), &options)?;
        Ok(())
    })();

    if let Err(e) = result {
        web_sys::console::error_2(&format!("Failed to push {}:", page).into(), &e);
    }
}

/// Show the shared Onsen toast
pub fn show_toast(message: &str) {
    let result = (|| -> Result<(), JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let ons = Reflect::get(&win, &"ons".into())?;
        let notification = Reflect::get(&ons, &"notification".into())?;
        let toast: Function = Reflect::get(&notification, &"toast".into())?.dyn_into()?;

        let options = Object::new();
        Reflect::set(&options, &"message".into(), &message.into())?;
        Reflect::set(&options, &"buttonLabel".into(), &"OK".into())?;

        toast.call1(&notification, &options)?;
        Ok(())
    })();

    if let Err(e) = result {
        web_sys::console::error_2(&"Failed to show toast:".into(), &e);
    }
}

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Log a failure and surface it through the toast
pub fn report_error(error: &flashcards_quiz::QuizError, toast_message: &str) {
    web_sys::console::error_1(&format!("Error: {}", error).into());
    show_toast(toast_message);
}
