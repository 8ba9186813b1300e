//! Prompt enhancement workflow: clarify, optionally fold answers, synthesize.

mod session;
mod share;
mod task;

pub use session::PromptWorkflow;
pub use share::share_link;
pub use task::{SteppedWorkflow, WorkflowTask, spawn_evaluate, spawn_resume};

use serde::Serialize;

use crate::adapters::{render_prompt, render_static};
use crate::domain::{
    AppError, ClarifyingQuestion, PromptComponents, WorkflowResult, parse_questions,
};
use crate::ports::{CompletionRequest, TextGenerator};

/// Sampling temperature for both workflow calls.
pub const WORKFLOW_TEMPERATURE: f64 = 0.7;

const MISSING_NOTES: &str = "None provided";

const CLARIFY_SYSTEM: &str = "workflow/clarify_system.txt";
const CLARIFY_USER: &str = "workflow/clarify_user.txt";
const SYNTHESIZE_SYSTEM: &str = "workflow/synthesize_system.txt";
const SYNTHESIZE_USER: &str = "workflow/synthesize_user.txt";

#[derive(Serialize)]
struct ComponentsView<'a> {
    context: &'a str,
    role: &'a str,
    task: &'a str,
    output_format: &'a str,
    additional_notes: &'a str,
}

impl<'a> From<&'a PromptComponents> for ComponentsView<'a> {
    fn from(components: &'a PromptComponents) -> Self {
        Self {
            context: components.context(),
            role: components.role(),
            task: components.task(),
            output_format: components.output_format(),
            additional_notes: components.additional_notes().unwrap_or(MISSING_NOTES),
        }
    }
}

/// Ask the service for clarifying questions, synthesizing directly when none
/// are returned.
pub fn evaluate<G: TextGenerator + ?Sized>(
    generator: &G,
    components: &PromptComponents,
) -> Result<WorkflowResult, AppError> {
    let request = CompletionRequest::new(
        render_static(CLARIFY_SYSTEM)?,
        render_prompt(CLARIFY_USER, ComponentsView::from(components))?,
        WORKFLOW_TEMPERATURE,
    )
    .json_mode();

    let response = generator.complete(&request)?;
    let questions = parse_questions(&response)?;
    tracing::info!(questions = questions.len(), "clarification step finished");

    if questions.is_empty() {
        return synthesize(generator, components);
    }
    Ok(WorkflowResult::NeedsClarification { questions })
}

/// Fold `answers` into the notes of `components` and synthesize the prompt.
///
/// A count mismatch is rejected before any request is made.
pub fn resume<G: TextGenerator + ?Sized>(
    generator: &G,
    components: &PromptComponents,
    questions: &[ClarifyingQuestion],
    answers: &[String],
) -> Result<WorkflowResult, AppError> {
    if questions.len() != answers.len() {
        return Err(AppError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let folded = components.with_clarifications(questions, answers);
    synthesize(generator, &folded)
}

/// Turn components into the finished prompt with a single request.
pub fn synthesize<G: TextGenerator + ?Sized>(
    generator: &G,
    components: &PromptComponents,
) -> Result<WorkflowResult, AppError> {
    let request = CompletionRequest::new(
        render_static(SYNTHESIZE_SYSTEM)?,
        render_prompt(SYNTHESIZE_USER, ComponentsView::from(components))?,
        WORKFLOW_TEMPERATURE,
    );

    let enhanced_prompt = generator.complete(&request)?;
    Ok(WorkflowResult::Complete { enhanced_prompt })
}
