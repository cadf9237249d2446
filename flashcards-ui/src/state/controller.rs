//! Page Controller
//!
//! The session state shared by the quiz pages, and the controller object
//! the page templates call into.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use flashcards_quiz::{
    EndpointMode, GradeResult, ProgressSnapshot, Prompt, QuizApi, QuizGroupingIndex, QuizResult,
    QuizSession,
};

use crate::api::BrowserClient;
use crate::pages;

/// State handed to every page loader and event handler
///
/// The session is only written after a request succeeds; a failed fetch
/// leaves it exactly as it was.
#[derive(Clone)]
pub struct QuizContext {
    pub session: Rc<RefCell<QuizSession>>,
    pub api: Rc<dyn QuizApi>,
}

impl QuizContext {
    pub fn new(mode: EndpointMode) -> Self {
        Self::with_api(Rc::new(BrowserClient::new(mode)))
    }

    pub fn with_api(api: Rc<dyn QuizApi>) -> Self {
        Self {
            session: Rc::new(RefCell::new(QuizSession::new())),
            api,
        }
    }

    /// Fetch the grouping index and cache it
    pub async fn refresh_groupings(&self) -> QuizResult<QuizGroupingIndex> {
        let index = self.api.fetch_groupings().await?;
        self.session.borrow_mut().set_groupings(index.clone());
        Ok(index)
    }

    /// Titles in the selected group, fetching the index only when none is cached
    pub async fn quiz_list(&self) -> QuizResult<Vec<String>> {
        // Work on a copy so no borrow is held across the fetch.
        let mut session = self.session.borrow().clone();
        let fetched = session.groupings().is_none();

        let titles = session.load_quiz_list(&*self.api).await?;
        if fetched {
            if let Some(index) = session.groupings() {
                self.session.borrow_mut().set_groupings(index.clone());
            }
        }
        Ok(titles)
    }

    /// Fetch the selected quiz and reset the answers to match it
    pub async fn open_quiz(&self) -> QuizResult<Vec<Prompt>> {
        let title = self
            .session
            .borrow()
            .selected_title()
            .unwrap_or_default()
            .to_string();

        let quiz = self.api.fetch_quiz(&title).await?;
        let prompts = quiz.prompts.clone();
        self.session.borrow_mut().set_quiz(quiz);
        Ok(prompts)
    }

    /// Store one answer and recompute progress
    pub fn answer(
        &self,
        index: usize,
        value: String,
        inline_grading: bool,
    ) -> QuizResult<ProgressSnapshot> {
        let mut session = self.session.borrow_mut();
        session.set_inline_grading(inline_grading);
        session.record_answer(index, value)
    }

    /// Submit the current answers for grading
    pub async fn score(&self, inline_grading: bool) -> QuizResult<GradeResult> {
        let session = {
            let mut session = self.session.borrow_mut();
            session.set_inline_grading(inline_grading);
            session.clone()
        };
        session.submit(&*self.api).await
    }
}

/// Entry points for the page templates' `init` handlers
#[wasm_bindgen]
pub struct QuizController {
    ctx: QuizContext,
}

#[wasm_bindgen]
impl QuizController {
    /// `static_endpoints` selects the fixture files instead of the live server
    #[wasm_bindgen(constructor)]
    pub fn new(static_endpoints: bool) -> QuizController {
        let mode = if static_endpoints {
            EndpointMode::Static
        } else {
            EndpointMode::Dynamic
        };
        QuizController {
            ctx: QuizContext::new(mode),
        }
    }

    /// groupings.html
    #[wasm_bindgen(js_name = loadQuizGroupings)]
    pub fn load_quiz_groupings(&self) {
        pages::groupings::load(self.ctx.clone());
    }

    /// quiz-list.html
    #[wasm_bindgen(js_name = loadQuizList)]
    pub fn load_quiz_list(&self) {
        pages::quiz_list::load(self.ctx.clone());
    }

    /// quiz.html
    #[wasm_bindgen(js_name = loadQuizQuestions)]
    pub fn load_quiz_questions(&self) {
        pages::quiz::load(self.ctx.clone());
    }

    /// score.html
    #[wasm_bindgen(js_name = scoreQuiz)]
    pub fn score_quiz(&self) {
        pages::score::load(self.ctx.clone());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use flashcards_quiz::{CompletedQuizSubmission, Quiz, QuizError};
    use std::cell::Cell;
    use uuid::Uuid;

    /// Serves fixed data; `fail` turns every call into a 503
    #[derive(Default)]
    struct FakeServer {
        fail: Cell<bool>,
        grouping_fetches: Cell<usize>,
    }

    impl FakeServer {
        fn check(&self) -> QuizResult<()> {
            if self.fail.get() {
                Err(QuizError::Status {
                    status: 503,
                    message: "unavailable".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl QuizApi for FakeServer {
        async fn fetch_groupings(&self) -> QuizResult<QuizGroupingIndex> {
            self.grouping_fetches.set(self.grouping_fetches.get() + 1);
            self.check()?;
            Ok(QuizGroupingIndex::new(vec![("Spanish", vec!["Colors", "Numbers"])]))
        }

        async fn fetch_quiz(&self, _title: &str) -> QuizResult<Quiz> {
            self.check()?;
            Ok(Quiz {
                id: Uuid::nil(),
                name: Some("Colors".to_string()),
                prompts: vec![Prompt::new("rojo", "red"), Prompt::new("azul", "blue")],
            })
        }

        async fn submit_quiz(
            &self,
            _title: &str,
            _quiz_id: &Uuid,
            submission: &CompletedQuizSubmission,
        ) -> QuizResult<GradeResult> {
            self.check()?;
            Ok(GradeResult {
                name: Some(submission.name.clone()),
                correct_answers: 2,
                prompt_count: 2,
                percentage: 100,
                time_minutes: None,
                time_seconds: Some(9),
            })
        }
    }

    fn context() -> (Rc<FakeServer>, QuizContext) {
        let server = Rc::new(FakeServer::default());
        let ctx = QuizContext::with_api(server.clone());
        (server, ctx)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_quiz_list_failure_leaves_session_untouched() {
        let (server, ctx) = context();
        ctx.session.borrow_mut().select_group("Spanish");
        server.fail.set(true);

        let err = ctx.quiz_list().await.unwrap_err();
        assert!(matches!(err, QuizError::Status { status: 503, .. }));
        assert!(ctx.session.borrow().groupings().is_none());
        assert_eq!(ctx.session.borrow().selected_group(), Some("Spanish"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_quiz_list_writes_back_fetched_index() {
        let (server, ctx) = context();
        ctx.session.borrow_mut().select_group("Spanish");

        let titles = ctx.quiz_list().await.unwrap();
        assert_eq!(titles, vec!["Colors", "Numbers"]);
        assert!(ctx.session.borrow().groupings().is_some());

        ctx.quiz_list().await.unwrap();
        assert_eq!(server.grouping_fetches.get(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_refresh_groupings_failure_keeps_cache() {
        let (server, ctx) = context();
        ctx.refresh_groupings().await.unwrap();

        server.fail.set(true);
        assert!(ctx.refresh_groupings().await.is_err());
        assert_eq!(
            ctx.session.borrow().groupings().and_then(|i| i.titles("Spanish")).map(|t| t.len()),
            Some(2)
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_open_quiz_failure_keeps_previous_answers() {
        let (server, ctx) = context();
        ctx.session.borrow_mut().select_title("Colors");
        ctx.open_quiz().await.unwrap();
        ctx.answer(0, "red".to_string(), true).unwrap();

        server.fail.set(true);
        assert!(ctx.open_quiz().await.is_err());
        assert_eq!(ctx.session.borrow().answers()[0], "red");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_answer_then_score() {
        let (_server, ctx) = context();
        ctx.session.borrow_mut().select_title("Colors");
        let prompts = ctx.open_quiz().await.unwrap();
        assert_eq!(prompts.len(), 2);

        let snapshot = ctx.answer(0, "red".to_string(), true).unwrap();
        assert!(snapshot.statuses[0].correct);
        assert!(!snapshot.submit_enabled());

        let snapshot = ctx.answer(1, "blue".to_string(), true).unwrap();
        assert!(snapshot.submit_enabled());
        assert_eq!(snapshot.progress_percent, 100.0);

        let result = ctx.score(false).await.unwrap();
        assert_eq!(result.percentage, 100);
        assert!(!ctx.session.borrow().inline_grading());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_answer_out_of_range() {
        let (_server, ctx) = context();
        ctx.session.borrow_mut().select_title("Colors");
        ctx.open_quiz().await.unwrap();

        assert!(matches!(
            ctx.answer(5, "x".to_string(), false),
            Err(QuizError::PromptOutOfRange { index: 5, count: 2 })
        ));
    }
}
