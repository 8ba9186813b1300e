use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CompletionRequest, TextGenerator};

type Responder = Box<dyn Fn(&CompletionRequest) -> Result<String, AppError> + Send + Sync>;

enum Source {
    Script(Mutex<VecDeque<Result<String, AppError>>>),
    Responder(Responder),
}

/// Text generator double that replays scripted results and records requests.
pub struct ScriptedTextGenerator {
    source: Source,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedTextGenerator {
    /// Replay `responses` in order; extra calls fail with a 500.
    pub fn new(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            source: Source::Script(Mutex::new(responses.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every call through `responder`.
    pub fn responding<F>(responder: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, AppError> + Send + Sync + 'static,
    {
        Self { source: Source::Responder(Box::new(responder)), requests: Mutex::new(Vec::new()) }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedTextGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.source {
            Source::Script(responses) => responses.lock().unwrap().pop_front().unwrap_or_else(|| {
                Err(AppError::Service { status: 500, body: "test: unexpected extra call".into() })
            }),
            Source::Responder(responder) => responder(request),
        }
    }
}
