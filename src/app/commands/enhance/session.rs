use crate::domain::{AppError, PromptComponents, WorkflowResult, WorkflowState};
use crate::ports::TextGenerator;

/// One enhancement session: `Start -> [AwaitingAnswers] -> Done`.
///
/// A failed step leaves the state untouched so the caller can retry it.
pub struct PromptWorkflow<G> {
    generator: G,
    state: WorkflowState,
}

impl<G: TextGenerator> PromptWorkflow<G> {
    pub fn new(generator: G) -> Self {
        Self { generator, state: WorkflowState::Start }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Run the clarification step for `components`.
    pub fn evaluate(&mut self, components: PromptComponents) -> Result<WorkflowResult, AppError> {
        if !matches!(self.state, WorkflowState::Start) {
            return Err(self.invalid_transition("evaluate"));
        }

        let result = super::evaluate(&self.generator, &components)?;
        self.state = match &result {
            WorkflowResult::NeedsClarification { questions } => {
                WorkflowState::AwaitingAnswers { components, questions: questions.clone() }
            }
            WorkflowResult::Complete { .. } => WorkflowState::Done,
        };
        Ok(result)
    }

    /// Answer the pending questions, in the order they were asked.
    pub fn resume(&mut self, answers: &[String]) -> Result<WorkflowResult, AppError> {
        let WorkflowState::AwaitingAnswers { components, questions } = &self.state else {
            return Err(self.invalid_transition("resume"));
        };

        let result = super::resume(&self.generator, components, questions, answers)?;
        self.state = WorkflowState::Done;
        Ok(result)
    }

    fn invalid_transition(&self, operation: &'static str) -> AppError {
        AppError::InvalidTransition { state: self.state.name(), operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTextGenerator;

    fn components() -> PromptComponents {
        PromptComponents::new("blog writing", "editor", "improve clarity", "markdown", None)
            .unwrap()
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn no_questions_completes_in_two_calls() {
        let generator = ScriptedTextGenerator::new(vec![
            Ok(r#"{"questions":[]}"#.into()),
            Ok("Polished prompt".into()),
        ]);
        let mut workflow = PromptWorkflow::new(&generator);

        let result = workflow.evaluate(components()).unwrap();

        assert_eq!(result, WorkflowResult::Complete { enhanced_prompt: "Polished prompt".into() });
        assert_eq!(workflow.state(), &WorkflowState::Done);
        assert_eq!(generator.call_count(), 2);
    }

    #[test]
    fn questions_pause_the_workflow_after_one_call() {
        let generator = ScriptedTextGenerator::new(vec![Ok(
            r#"{"questions":["What tone?","Target audience?"]}"#.into(),
        )]);
        let mut workflow = PromptWorkflow::new(&generator);

        let result = workflow.evaluate(components()).unwrap();

        let WorkflowResult::NeedsClarification { questions } = result else {
            panic!("expected clarification");
        };
        let texts: Vec<&str> = questions.iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["What tone?", "Target audience?"]);
        assert_eq!(questions[1].id().get(), 2);
        assert_eq!(workflow.state().name(), "awaiting_answers");
        assert_eq!(generator.call_count(), 1);
    }

    #[test]
    fn resume_folds_answers_and_completes() {
        let generator = ScriptedTextGenerator::new(vec![
            Ok(r#"{"questions":["What tone?","Target audience?"]}"#.into()),
            Ok("Enhanced".into()),
        ]);
        let mut workflow = PromptWorkflow::new(&generator);
        workflow.evaluate(components()).unwrap();

        let result = workflow.resume(&answers(&["Casual", "Developers"])).unwrap();

        assert_eq!(result, WorkflowResult::Complete { enhanced_prompt: "Enhanced".into() });
        assert_eq!(generator.call_count(), 2);
        assert!(generator.requests()[1]
            .user
            .contains("Q: What tone?\nA: Casual\n\nQ: Target audience?\nA: Developers\n\n"));
        assert_eq!(workflow.state(), &WorkflowState::Done);
    }

    #[test]
    fn service_error_on_synthesis_keeps_awaiting_state() {
        let generator = ScriptedTextGenerator::new(vec![
            Ok(r#"{"questions":["What tone?"]}"#.into()),
            Err(AppError::Service { status: 401, body: "invalid api key".into() }),
        ]);
        let mut workflow = PromptWorkflow::new(&generator);
        workflow.evaluate(components()).unwrap();

        let err = workflow.resume(&answers(&["Casual"])).unwrap_err();

        assert!(matches!(err, AppError::Service { status: 401, .. }));
        assert_eq!(workflow.state().name(), "awaiting_answers");
    }

    #[test]
    fn service_error_on_direct_synthesis_keeps_start_state() {
        let generator = ScriptedTextGenerator::new(vec![
            Ok(r#"{"questions":[]}"#.into()),
            Err(AppError::Service { status: 401, body: "invalid api key".into() }),
        ]);
        let mut workflow = PromptWorkflow::new(&generator);

        let err = workflow.evaluate(components()).unwrap_err();

        assert!(matches!(err, AppError::Service { status: 401, .. }));
        assert_eq!(workflow.state(), &WorkflowState::Start);
    }

    #[test]
    fn mismatch_keeps_state_and_allows_retry() {
        let generator = ScriptedTextGenerator::new(vec![
            Ok(r#"{"questions":["What tone?","Target audience?"]}"#.into()),
            Ok("Enhanced".into()),
        ]);
        let mut workflow = PromptWorkflow::new(&generator);
        workflow.evaluate(components()).unwrap();

        let err = workflow.resume(&answers(&["Casual"])).unwrap_err();
        assert!(matches!(err, AppError::AnswerCountMismatch { expected: 2, actual: 1 }));
        assert_eq!(generator.call_count(), 1);

        assert!(workflow.resume(&answers(&["Casual", "Developers"])).unwrap().is_complete());
    }

    #[test]
    fn operations_from_the_wrong_state_are_rejected() {
        let generator = ScriptedTextGenerator::new(vec![
            Ok(r#"{"questions":[]}"#.into()),
            Ok("Done".into()),
        ]);
        let mut workflow = PromptWorkflow::new(&generator);

        let err = workflow.resume(&[]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot resume while workflow is start");

        workflow.evaluate(components()).unwrap();
        let err = workflow.evaluate(components()).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition { state: "done", operation: "evaluate" }
        ));
        assert_eq!(generator.call_count(), 2);
    }
}
