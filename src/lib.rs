//! prompt-enhancer: refine prompt components into finished prompts and
//! generate platform content through an OpenAI-compatible API.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::commands::enhance::{
    PromptWorkflow, SteppedWorkflow, WorkflowTask, evaluate, resume, share_link, spawn_evaluate,
    spawn_resume,
};
pub use domain::{
    AppConfig, AppError, ClarifyingQuestion, PromptComponents, QuestionId, WorkflowResult,
    WorkflowState,
};
pub use ports::{CompletionRequest, ImageGenerator, TextGenerator};
