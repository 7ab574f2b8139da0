pub mod benchmark;
pub mod common;
pub mod headless;
mod interactive;

pub use benchmark::{run_benchmark, run_benchmark_with, BenchmarkReport, BenchmarkTally};
pub use headless::{
    run_match, Match, MatchConfig, MatchReason, MatchResult, MatchStatus, RallyAcceleration,
    Winner,
};
pub use interactive::{run_interactive, status_text, Seat};
