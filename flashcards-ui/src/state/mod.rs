//! State Management
//!
//! Per-session quiz state and the controller exported to JavaScript.

pub mod controller;

pub use controller::{QuizContext, QuizController};
