//! Endpoint Layout
//!
//! Where the client fetches groupings and quizzes and where it sends answers.
//! `Dynamic` targets the live quiz server; `Static` targets fixture files so
//! the UI can be exercised without a running server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Which set of endpoints the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointMode {
    #[default]
    Dynamic,
    Static,
}

impl FromStr for EndpointMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamic" => Ok(EndpointMode::Dynamic),
            "static" => Ok(EndpointMode::Static),
            other => Err(format!("unknown endpoint mode '{}' (expected dynamic or static)", other)),
        }
    }
}

impl fmt::Display for EndpointMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointMode::Dynamic => f.write_str("dynamic"),
            EndpointMode::Static => f.write_str("static"),
        }
    }
}

/// HTTP method used for grading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingMethod {
    /// POST the submission as JSON
    Post,
    /// GET a pre-graded fixture; no body is sent
    Get,
}

/// A resolved grading request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingRequest {
    pub url: String,
    pub method: GradingMethod,
}

/// Content type sent with a POSTed submission
pub const SUBMISSION_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Base URL used by the browser pages, relative to the UI directory
pub const BROWSER_BASE_URL: &str = "..";

/// Resolves quiz server URLs for one base URL and mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    mode: EndpointMode,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>, mode: EndpointMode) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, mode }
    }

    /// Endpoints for the browser pages served next to the API
    pub fn browser(mode: EndpointMode) -> Self {
        Self::new(BROWSER_BASE_URL, mode)
    }

    pub fn mode(&self) -> EndpointMode {
        self.mode
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Grouping index; the same in both modes
    pub fn groupings_url(&self) -> String {
        format!("{}/quizzes", self.base_url)
    }

    /// A single quiz by title
    pub fn quiz_url(&self, title: &str) -> String {
        match self.mode {
            EndpointMode::Dynamic => {
                format!("{}/quizzes/{}", self.base_url, urlencoding::encode(title))
            }
            EndpointMode::Static => format!("{}/quiz", self.base_url),
        }
    }

    /// Grading target for a quiz instance
    pub fn grading_request(&self, title: &str, quiz_id: &Uuid) -> GradingRequest {
        match self.mode {
            EndpointMode::Dynamic => GradingRequest {
                url: format!(
                    "{}/quizzes/{}/{}",
                    self.base_url,
                    urlencoding::encode(title),
                    quiz_id
                ),
                method: GradingMethod::Post,
            },
            EndpointMode::Static => GradingRequest {
                url: format!("{}/gradedQuiz", self.base_url),
                method: GradingMethod::Get,
            },
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::browser(EndpointMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_id() -> Uuid {
        Uuid::parse_str("6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f").unwrap()
    }

    #[test]
    fn test_dynamic_urls() {
        let endpoints = Endpoints::new("http://localhost:8080/", EndpointMode::Dynamic);

        assert_eq!(endpoints.groupings_url(), "http://localhost:8080/quizzes");
        assert_eq!(endpoints.quiz_url("Colors"), "http://localhost:8080/quizzes/Colors");

        let grading = endpoints.grading_request("Colors", &quiz_id());
        assert_eq!(
            grading.url,
            "http://localhost:8080/quizzes/Colors/6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f"
        );
        assert_eq!(grading.method, GradingMethod::Post);
    }

    #[test]
    fn test_titles_are_encoded_as_path_segments() {
        let endpoints = Endpoints::browser(EndpointMode::Dynamic);
        assert_eq!(endpoints.quiz_url("Basic Colors"), "../quizzes/Basic%20Colors");
        assert_eq!(endpoints.quiz_url("A/B"), "../quizzes/A%2FB");
    }

    #[test]
    fn test_static_urls() {
        let endpoints = Endpoints::browser(EndpointMode::Static);

        assert_eq!(endpoints.groupings_url(), "../quizzes");
        assert_eq!(endpoints.quiz_url("Colors"), "../quiz");

        let grading = endpoints.grading_request("Colors", &quiz_id());
        assert_eq!(grading.url, "../gradedQuiz");
        assert_eq!(grading.method, GradingMethod::Get);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("Dynamic".parse::<EndpointMode>(), Ok(EndpointMode::Dynamic));
        assert_eq!(" static ".parse::<EndpointMode>(), Ok(EndpointMode::Static));
        assert!("fixtures".parse::<EndpointMode>().is_err());
        assert_eq!(EndpointMode::Static.to_string(), "static");
    }
}
