//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod stats;

pub use evaluate::{EvaluationResult, evaluate_guess};
pub use simple::run_simple;
pub use stats::{StatsReport, load_stats_report};
