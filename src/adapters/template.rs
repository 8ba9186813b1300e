use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::sync::OnceLock;

use crate::adapters::catalogs::prompt_assets::prompt_assets;
use crate::domain::AppError;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render an embedded prompt template by its relative path.
///
/// Undefined variables are errors, so a template and its context cannot
/// drift apart silently.
pub fn render_prompt<S: Serialize>(template_name: &str, context: S) -> Result<String, AppError> {
    let env = environment()?;
    let template =
        env.get_template(template_name).map_err(|err| template_error(template_name, err))?;
    let rendered = template.render(context).map_err(|err| template_error(template_name, err))?;

    tracing::debug!(template = template_name, bytes = rendered.len(), "prompt rendered");
    Ok(rendered)
}

/// Render an embedded template that takes no variables.
pub fn render_static(template_name: &str) -> Result<String, AppError> {
    render_prompt(template_name, minijinja::context! {})
}

fn environment() -> Result<&'static Environment<'static>, AppError> {
    if let Some(env) = ENV.get() {
        return Ok(env);
    }

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    for (name, source) in prompt_assets() {
        env.add_template(name, source).map_err(|err| template_error(name, err))?;
    }
    Ok(ENV.get_or_init(|| env))
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template_name.to_string(), reason: err.to_string() }
}
