//! UI Components
//!
//! Leptos components mounted into the page templates.

pub mod question_row;
pub mod title_card;

pub use question_row::QuestionList;
pub use title_card::TitleCards;
