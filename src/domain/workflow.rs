//! Prompt workflow results and states.

use serde::Serialize;

use crate::domain::clarification::ClarifyingQuestion;
use crate::domain::components::PromptComponents;

/// Outcome of a workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WorkflowResult {
    /// The service asked for more information before synthesizing.
    NeedsClarification { questions: Vec<ClarifyingQuestion> },
    /// The final synthesized prompt.
    Complete { enhanced_prompt: String },
}

impl WorkflowResult {
    pub fn is_complete(&self) -> bool {
        matches!(self, WorkflowResult::Complete { .. })
    }

    /// The finished prompt, if this step produced one.
    pub fn into_enhanced_prompt(self) -> Option<String> {
        match self {
            WorkflowResult::Complete { enhanced_prompt } => Some(enhanced_prompt),
            WorkflowResult::NeedsClarification { .. } => None,
        }
    }
}

/// Where a workflow session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Start,
    AwaitingAnswers { components: PromptComponents, questions: Vec<ClarifyingQuestion> },
    Done,
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Start => "start",
            WorkflowState::AwaitingAnswers { .. } => "awaiting_answers",
            WorkflowState::Done => "done",
        }
    }
}
