//! # Flashcards Quiz
//!
//! Client for the flash-cards quiz server: fetches quiz groupings and
//! questions, tracks answer progress, and submits completed quizzes for
//! grading.
//!
//! ## Modules
//!
//! - [`model`]: Wire types and errors
//! - [`endpoints`]: Dynamic and static endpoint layouts
//! - [`progress`]: Per-keystroke progress tracking
//! - [`session`]: Per-session state driven through a [`QuizApi`]
//! - [`scoring`]: Submission checks and score formatting
//! - [`client`]: The `QuizApi` trait and the native reqwest client
//! - [`config`]: TOML and environment configuration
//!
//! The browser front end (`flashcards-ui`) builds on this crate with the
//! `http-client` feature disabled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flashcards_quiz::{Config, QuizClient, QuizSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = QuizClient::new(&config.api)?;
//!
//!     let mut session = QuizSession::new();
//!     session.load_groupings(&client).await?;
//!     session.select_group("Spanish");
//!     let titles = session.load_quiz_list(&client).await?;
//!
//!     session.select_title(titles[0].clone());
//!     session.load_quiz(&client).await?;
//!     session.record_answer(0, "red")?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod model;
pub mod progress;
pub mod scoring;
pub mod session;

pub use client::QuizApi;
#[cfg(feature = "http-client")]
pub use client::QuizClient;

pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, GradingConfig, LoggingConfig,
};

pub use endpoints::{EndpointMode, Endpoints, GradingMethod, GradingRequest};

pub use model::{
    ApiErrorBody, CompletedQuizSubmission, GradeResult, Prompt, Quiz, QuizError, QuizGrouping,
    QuizGroupingIndex, QuizResult,
};

pub use progress::{ProgressSnapshot, PromptStatus};
pub use scoring::{format_duration, inline_grading_label, ScoreReport};
pub use session::QuizSession;
