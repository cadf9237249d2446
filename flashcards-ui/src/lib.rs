//! Flashcards Quiz Pages
//!
//! Browser view layer for the flash-cards quiz app, built with Leptos (WASM).
//!
//! # Features
//!
//! - Quiz grouping and quiz list cards
//! - Question rows with live progress and optional inline grading
//! - Submission and score display
//!
//! # Architecture
//!
//! The pages themselves are Onsen UI templates pushed on `#myNavigator`. Each
//! template's `init` handler calls into a [`QuizController`] exported from
//! this crate, which fetches from the quiz server and mounts Leptos views
//! into the template's existing elements. Element ids and classes are the
//! ones the templates and stylesheets already use.
//!
//! ```js
//! import init, { QuizController } from './pkg/flashcards_ui.js';
//! await init();
//! const quiz = new QuizController(false);
//! document.addEventListener('init', (event) => {
//!   if (event.target.id === 'quiz-grouping-list') quiz.loadQuizGroupings();
//! });
//! ```

use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod dom;
pub mod pages;
pub mod state;

pub use state::{QuizContext, QuizController};

#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
}
