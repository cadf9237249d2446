//! HTTP API Client
//!
//! `QuizApi` over the browser's fetch, via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use flashcards_quiz::endpoints::SUBMISSION_CONTENT_TYPE;
use flashcards_quiz::{
    CompletedQuizSubmission, EndpointMode, Endpoints, GradeResult, GradingMethod, Quiz, QuizApi,
    QuizError, QuizGroupingIndex, QuizResult,
};

use crate::dom;

/// Quiz server client for the browser pages
pub struct BrowserClient {
    endpoints: Endpoints,
}

impl BrowserClient {
    /// Client for endpoints relative to the UI directory
    pub fn new(mode: EndpointMode) -> Self {
        Self {
            endpoints: Endpoints::browser(mode),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> QuizResult<T> {
        dom::log(&format!("GET {}", url));

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| QuizError::Network(e.to_string()))?;

        read_json(response).await
    }
}

/// Decode a response body, mapping non-2xx statuses to `QuizError::Status`
async fn read_json<T: DeserializeOwned>(response: Response) -> QuizResult<T> {
    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| QuizError::Network(e.to_string()))?;

    decode(ok, status, &body)
}

fn decode<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> QuizResult<T> {
    if !ok {
        return Err(QuizError::from_status(status, body));
    }

    serde_json::from_str(body).map_err(QuizError::from)
}

#[async_trait(?Send)]
impl QuizApi for BrowserClient {
    async fn fetch_groupings(&self) -> QuizResult<QuizGroupingIndex> {
        self.get_json(&self.endpoints.groupings_url()).await
    }

    async fn fetch_quiz(&self, title: &str) -> QuizResult<Quiz> {
        self.get_json(&self.endpoints.quiz_url(title)).await
    }

    async fn submit_quiz(
        &self,
        title: &str,
        quiz_id: &Uuid,
        submission: &CompletedQuizSubmission,
    ) -> QuizResult<GradeResult> {
        let target = self.endpoints.grading_request(title, quiz_id);

        match target.method {
            GradingMethod::Post => {
                dom::log(&format!("POST {}", target.url));
                let body = serde_json::to_string(submission)?;

                let response = Request::post(&target.url)
                    .header("Content-type", SUBMISSION_CONTENT_TYPE)
                    .body(body)
                    .map_err(|e| QuizError::Network(format!("Request build error: {}", e)))?
                    .send()
                    .await
                    .map_err(|e| QuizError::Network(e.to_string()))?;

                read_json(response).await
            }
            GradingMethod::Get => self.get_json(&target.url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_uses_server_message() {
        let body = r#"{"code": 404, "message": "No match found for quiz: 'Shapes'"}"#;
        let err = decode::<Quiz>(false, 404, body).unwrap_err();

        match err {
            QuizError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "No match found for quiz: 'Shapes'");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_status_with_plain_body() {
        let err = decode::<QuizGroupingIndex>(false, 502, "  Bad Gateway\n").unwrap_err();
        assert!(matches!(err, QuizError::Status { status: 502, ref message } if message == "Bad Gateway"));
    }

    #[test]
    fn test_success_body_is_decoded() {
        let index: QuizGroupingIndex = decode(true, 200, r#"{"Art": ["Painters"]}"#).unwrap();
        assert_eq!(index.titles("Art").map(|t| t.len()), Some(1));

        assert!(matches!(
            decode::<QuizGroupingIndex>(true, 200, "<html>"),
            Err(QuizError::Decode(_))
        ));
    }
}
