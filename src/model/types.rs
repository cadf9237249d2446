//! Core data types for the quiz client
//!
//! This module defines the wire types exchanged with the quiz server:
//! - `QuizGroupingIndex`: Section name to ordered quiz titles
//! - `Quiz` and `Prompt`: A quiz and its question/answer pairs
//! - `CompletedQuizSubmission`: The answers sent for grading
//! - `GradeResult`: The server's grading response

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Quiz titles grouped by section, in the order the server sent them
///
/// Serialized as a JSON object (`{"Spanish": ["Colors", "Numbers"]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizGroupingIndex {
    sections: Vec<QuizGrouping>,
}

/// A named category containing a list of quiz titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizGrouping {
    pub name: String,
    pub titles: Vec<String>,
}

impl QuizGroupingIndex {
    /// Build an index from `(section, titles)` pairs, keeping their order
    pub fn new<I, S, T>(sections: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut index = Self::default();
        for (name, titles) in sections {
            index.insert(name.into(), titles.into_iter().map(Into::into).collect());
        }
        index
    }

    /// Insert a section, replacing the titles of an existing one in place
    pub fn insert(&mut self, name: String, titles: Vec<String>) {
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.titles = titles,
            None => self.sections.push(QuizGrouping { name, titles }),
        }
    }

    /// Titles for one section
    pub fn titles(&self, section: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .map(|s| s.titles.as_slice())
    }

    /// Section names in server order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn sections(&self) -> &[QuizGrouping] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for QuizGroupingIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.name, &section.titles)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QuizGroupingIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = QuizGroupingIndex;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping section names to quiz titles")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut index = QuizGroupingIndex::default();
                while let Some((name, titles)) = access.next_entry::<String, Vec<String>>()? {
                    index.insert(name, titles);
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}

/// A single question/expected-answer pair
///
/// On the wire a prompt is a one-key object: `{"rojo": "red"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub question: String,
    pub answer: String,
}

impl Prompt {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl Serialize for Prompt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.question, &self.answer)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Prompt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PromptVisitor;

        impl<'de> Visitor<'de> for PromptVisitor {
            type Value = Prompt;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a single-key object mapping a question to its answer")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let (question, answer) = access
                    .next_entry::<String, String>()?
                    .ok_or_else(|| de::Error::custom("prompt object has no entries"))?;

                // Only the first pair counts; drain the rest so the map is consumed.
                while access
                    .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
                    .is_some()
                {}

                Ok(Prompt { question, answer })
            }
        }

        deserializer.deserialize_map(PromptVisitor)
    }
}

/// A quiz as served by the quiz endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub prompts: Vec<Prompt>,
}

impl Quiz {
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }
}

/// Answers submitted for grading, aligned positionally with the quiz prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedQuizSubmission {
    pub name: String,
    pub inline_grading: bool,
    pub answers: Vec<String>,
}

/// Grading response from the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub correct_answers: u32,
    pub prompt_count: u32,
    pub percentage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<u32>,
}

/// Error body produced by the server's exception mapper
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
}
