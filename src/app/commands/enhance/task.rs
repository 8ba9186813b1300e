use std::any::Any;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::PromptWorkflow;
use crate::domain::{AppError, ClarifyingQuestion, PromptComponents, WorkflowResult};
use crate::ports::TextGenerator;

const THREAD_NAME: &str = "prompt-workflow";

/// A workflow step running on a background thread.
///
/// Dropping the task detaches the thread and discards its result.
pub struct WorkflowTask<T> {
    handle: JoinHandle<Result<T, AppError>>,
}

impl<T: Send + 'static> WorkflowTask<T> {
    fn spawn<F>(job: F) -> Result<Self, AppError>
    where
        F: FnOnce() -> Result<T, AppError> + Send + 'static,
    {
        let handle = thread::Builder::new().name(THREAD_NAME.to_string()).spawn(job)?;
        Ok(Self { handle })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the step completes.
    pub fn wait(self) -> Result<T, AppError> {
        self.handle.join().map_err(|payload| AppError::TaskFailed(panic_message(payload)))?
    }
}

/// Run [`super::evaluate`] in the background.
pub fn spawn_evaluate<G>(
    generator: Arc<G>,
    components: PromptComponents,
) -> Result<WorkflowTask<WorkflowResult>, AppError>
where
    G: TextGenerator + Send + Sync + ?Sized + 'static,
{
    WorkflowTask::spawn(move || super::evaluate(generator.as_ref(), &components))
}

/// Run [`super::resume`] in the background.
pub fn spawn_resume<G>(
    generator: Arc<G>,
    components: PromptComponents,
    questions: Vec<ClarifyingQuestion>,
    answers: Vec<String>,
) -> Result<WorkflowTask<WorkflowResult>, AppError>
where
    G: TextGenerator + Send + Sync + ?Sized + 'static,
{
    WorkflowTask::spawn(move || {
        super::resume(generator.as_ref(), &components, &questions, &answers)
    })
}

/// A session handed back after one step ran in the background.
///
/// A failed step leaves `workflow` in the state it had before the step.
pub struct SteppedWorkflow<G> {
    pub workflow: PromptWorkflow<G>,
    pub result: Result<WorkflowResult, AppError>,
}

impl<G> PromptWorkflow<G>
where
    G: TextGenerator + Send + 'static,
{
    /// Move the session onto a background thread and run [`PromptWorkflow::evaluate`].
    pub fn spawn_evaluate(
        mut self,
        components: PromptComponents,
    ) -> Result<WorkflowTask<SteppedWorkflow<G>>, AppError> {
        WorkflowTask::spawn(move || {
            let result = self.evaluate(components);
            Ok(SteppedWorkflow { workflow: self, result })
        })
    }

    /// Move the session onto a background thread and run [`PromptWorkflow::resume`].
    pub fn spawn_resume(
        mut self,
        answers: Vec<String>,
    ) -> Result<WorkflowTask<SteppedWorkflow<G>>, AppError> {
        WorkflowTask::spawn(move || {
            let result = self.resume(&answers);
            Ok(SteppedWorkflow { workflow: self, result })
        })
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return message.to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "workflow thread panicked".to_string()
}
