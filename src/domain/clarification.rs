//! Clarifying questions and the elicitation response format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// 1-based position of a question in the elicitation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct QuestionId(usize);

impl QuestionId {
    pub fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// A follow-up question suggested by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClarifyingQuestion {
    id: QuestionId,
    text: String,
}

impl ClarifyingQuestion {
    pub fn new(id: QuestionId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Deserialize)]
struct QuestionsPayload {
    questions: Vec<String>,
}

/// Parse the JSON object returned by the clarification step.
///
/// Questions keep the order in which the service listed them and receive
/// ordinal identifiers starting at 1.
pub fn parse_questions(text: &str) -> Result<Vec<ClarifyingQuestion>, AppError> {
    let payload: QuestionsPayload =
        serde_json::from_str(text).map_err(|e| AppError::ClarificationParse(e.to_string()))?;

    Ok(payload
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, text)| ClarifyingQuestion::new(QuestionId::new(index + 1), text))
        .collect())
}
