pub mod clarification;
pub mod components;
pub mod configuration;
pub mod content;
pub mod error;
pub mod imagery;
pub mod role_preset;
pub mod workflow;

pub use clarification::{ClarifyingQuestion, QuestionId, parse_questions};
pub use components::PromptComponents;
pub use configuration::{ApiConfig, AppConfig};
pub use error::AppError;
pub use role_preset::RolePreset;
pub use workflow::{WorkflowResult, WorkflowState};
