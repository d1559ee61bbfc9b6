use std::sync::Arc;

use lectio_application::EvaluationUseCase;

#[derive(Clone)]
pub struct AppState {
    pub evaluation: Arc<dyn EvaluationUseCase>,
}

impl AppState {
    pub fn new(evaluation: Arc<dyn EvaluationUseCase>) -> Self {
        Self { evaluation }
    }
}
