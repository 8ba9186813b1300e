//! Enhance command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use dialoguer::Select;

use super::{load_context, prompt_text, value_or_prompt};
use crate::app::commands::enhance::{PromptWorkflow, SteppedWorkflow, WorkflowTask, share_link};
use crate::domain::{AppError, ClarifyingQuestion, PromptComponents, RolePreset, WorkflowResult};

const CUSTOM_ROLE_OPTION: &str = "[custom]";

#[derive(Args)]
pub struct EnhanceArgs {
    /// Background for the prompt
    #[arg(long)]
    context: Option<String>,
    /// Role the AI should take
    #[arg(long, conflicts_with = "persona")]
    role: Option<String>,
    /// Canned role: techie, content-genius, or teacher
    #[arg(short, long)]
    persona: Option<String>,
    /// What the AI should do
    #[arg(long)]
    task: Option<String>,
    /// Desired output format
    #[arg(long)]
    format: Option<String>,
    /// Extra notes for the prompt
    #[arg(long)]
    notes: Option<String>,
    /// Answer to a clarifying question, in question order (repeatable)
    #[arg(short, long = "answer")]
    pub(super) answers: Vec<String>,
    /// Also write the enhanced prompt to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print a link that opens the prompt in ChatGPT
    #[arg(long)]
    share_link: bool,
}

pub fn run_enhance(config: Option<PathBuf>, args: EnhanceArgs) -> Result<(), AppError> {
    let ctx = load_context(config)?;

    let context = value_or_prompt(args.context, "Context")?;
    let role = match (args.role, args.persona) {
        (Some(role), _) => role,
        (None, Some(persona)) => RolePreset::from_name(&persona)?.description().to_string(),
        (None, None) => prompt_role()?,
    };
    let task = value_or_prompt(args.task, "Task")?;
    let format = value_or_prompt(args.format, "Output format")?;
    let components = PromptComponents::new(context, role, task, format, args.notes)?;

    let workflow = PromptWorkflow::new(ctx.shared_text());
    let SteppedWorkflow { workflow, result } = wait(workflow.spawn_evaluate(components)?)?;
    let result = match result? {
        WorkflowResult::NeedsClarification { questions } => {
            let answers = if args.answers.is_empty() {
                prompt_answers(&questions)?
            } else {
                args.answers
            };
            wait(workflow.spawn_resume(answers)?)?.result?
        }
        complete => {
            if !args.answers.is_empty() {
                tracing::warn!(
                    answers = args.answers.len(),
                    "no clarifying questions were asked, ignoring answers"
                );
            }
            complete
        }
    };
    let enhanced_prompt = result.into_enhanced_prompt().ok_or_else(|| {
        AppError::MalformedResponse("Workflow finished without a prompt".to_string())
    })?;

    println!("{}", enhanced_prompt);
    if let Some(path) = args.output {
        fs::write(&path, &enhanced_prompt)?;
        eprintln!("✅ Saved enhanced prompt to {}", path.display());
    }
    if args.share_link {
        println!("\n🔗 {}", share_link(&enhanced_prompt)?);
    }
    Ok(())
}

fn wait<T: Send + 'static>(task: WorkflowTask<T>) -> Result<T, AppError> {
    eprintln!("⏳ Waiting for the service...");
    task.wait()
}

fn prompt_role() -> Result<String, AppError> {
    let mut items: Vec<String> = RolePreset::ALL
        .iter()
        .map(|preset| format!("{}: {}", preset.name(), preset.description()))
        .collect();
    items.push(CUSTOM_ROLE_OPTION.to_string());

    let selection = Select::new()
        .with_prompt("Select AI role")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select role: {}", err)))?;

    match selection {
        Some(index) if index < RolePreset::ALL.len() => {
            Ok(RolePreset::ALL[index].description().to_string())
        }
        Some(_) => prompt_text("AI role", false),
        None => Err(AppError::Validation("Cancelled".to_string())),
    }
}

fn prompt_answers(questions: &[ClarifyingQuestion]) -> Result<Vec<String>, AppError> {
    eprintln!("The service has a few clarifying questions (leave blank to skip):");
    questions
        .iter()
        .map(|question| prompt_text(&format!("{} {}", question.id(), question.text()), true))
        .collect()
}
