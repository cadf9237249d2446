//! Quiz Server HTTP Client
//!
//! reqwest client for the grouping, quiz, and grading endpoints.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use uuid::Uuid;

use super::QuizApi;
use crate::config::ApiConfig;
use crate::endpoints::{Endpoints, GradingMethod, SUBMISSION_CONTENT_TYPE};
use crate::model::{
    CompletedQuizSubmission, GradeResult, Quiz, QuizError, QuizGroupingIndex, QuizResult,
};

/// Native quiz server client
pub struct QuizClient {
    client: Client,
    endpoints: Endpoints,
}

impl QuizClient {
    /// Create a client for the configured server
    pub fn new(config: &ApiConfig) -> QuizResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| QuizError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(config.base_url.clone(), config.mode),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> QuizResult<T> {
        tracing::info!(url = %url, "GET");
        let response = self.client.get(url).send().await.map_err(network_error)?;
        read_json(response).await
    }
}

fn network_error(e: reqwest::Error) -> QuizError {
    if e.is_timeout() {
        QuizError::Network("request timed out".to_string())
    } else {
        QuizError::Network(e.to_string())
    }
}

/// Turn a response into `T`, mapping non-2xx statuses to `QuizError::Status`
async fn read_json<T: DeserializeOwned>(response: Response) -> QuizResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if !status.is_success() {
        let err = QuizError::from_status(status.as_u16(), &body);
        tracing::warn!(error = %err, "Quiz server returned an error");
        return Err(err);
    }

    tracing::debug!(body = %body, "Response body");
    serde_json::from_str(&body).map_err(QuizError::from)
}

#[async_trait(?Send)]
impl QuizApi for QuizClient {
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
                tracing::info!(url = %target.url, "POST");
                let body = serde_json::to_string(submission)?;
                let response = self
                    .client
                    .post(&target.url)
                    .header(CONTENT_TYPE, SUBMISSION_CONTENT_TYPE)
                    .body(body)
                    .send()
                    .await
                    .map_err(network_error)?;
                read_json(response).await
            }
            GradingMethod::Get => self.get_json(&target.url).await,
        }
    }
}
