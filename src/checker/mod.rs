mod evaluator;
mod orchestrator;

pub use evaluator::{CheckMapEvaluator, evaluate};
pub use orchestrator::{CheckOrchestrator, run_checks};
