//! Prompt components collected from the user.

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::clarification::ClarifyingQuestion;

const CLARIFICATION_HEADER: &str = "\n\nClarifying Information:\n";

/// The four required prompt fields plus optional notes.
///
/// Required fields are trimmed and guaranteed non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptComponents {
    context: String,
    role: String,
    task: String,
    output_format: String,
    additional_notes: Option<String>,
}

impl PromptComponents {
    pub fn new(
        context: impl Into<String>,
        role: impl Into<String>,
        task: impl Into<String>,
        output_format: impl Into<String>,
        additional_notes: Option<String>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            context: required("context", context.into())?,
            role: required("role", role.into())?,
            task: required("task", task.into())?,
            output_format: required("output_format", output_format.into())?,
            additional_notes: additional_notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
        })
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }

    pub fn additional_notes(&self) -> Option<&str> {
        self.additional_notes.as_deref()
    }

    /// Return a copy whose notes carry one `Q:`/`A:` block per question.
    ///
    /// Pairing is positional; callers must have checked that both slices have
    /// the same length.
    pub fn with_clarifications(&self, questions: &[ClarifyingQuestion], answers: &[String]) -> Self {
        let mut notes = self.additional_notes.clone().unwrap_or_default();
        notes.push_str(CLARIFICATION_HEADER);
        for (question, answer) in questions.iter().zip(answers) {
            notes.push_str(&format!("Q: {}\nA: {}\n\n", question.text(), answer.trim()));
        }

        Self { additional_notes: Some(notes), ..self.clone() }
    }
}

fn required(field: &'static str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
