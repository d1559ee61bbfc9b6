pub mod evaluate;

pub use evaluate::{EvaluationUseCase, EvaluationUseCaseImpl};
