//! Benchmark: many reference-vs-candidate matches rolled into one pass/fail verdict.

use std::io::{self, Write};

use serde::Serialize;

use crate::ai::{create_controller, Controller, ControllerKind, ReferenceBot};
use crate::config::{BenchmarkConfig, PhysicsConfig};
use crate::game::Side;

use super::headless::{run_match, MatchConfig, MatchReason, MatchResult, RallyAcceleration, Winner};

/// Reference plays left, the candidate plays right, every match.
pub const REFERENCE_SIDE: Side = Side::Left;
pub const CANDIDATE_SIDE: Side = Side::Right;

/// Per-controller seed so the two sides of a match never share a random stream
pub fn controller_seed(match_seed: u64, side: Side) -> u64 {
    let salt = match side {
        Side::Left => 0x9E37_79B9_7F4A_7C15,
        Side::Right => 0xC2B2_AE3D_27D4_EB4F,
    };
    match_seed ^ salt
}

/// Running win/draw/error counts for the candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BenchmarkTally {
    pub matches: u32,
    pub candidate_wins: u32,
    pub reference_wins: u32,
    pub draws: u32,
    pub candidate_errors: u32,
}

impl BenchmarkTally {
    pub fn record(&mut self, result: &MatchResult) {
        self.matches += 1;
        match result.winner {
            Winner::Right => self.candidate_wins += 1,
            Winner::Left => self.reference_wins += 1,
            Winner::Draw => self.draws += 1,
        }
        if result.reason == MatchReason::RightAiError {
            self.candidate_errors += 1;
        }
    }

    /// Matches with a definite winner
    pub fn decisive(&self) -> u32 {
        self.candidate_wins + self.reference_wins
    }

    /// Candidate's share of decisive matches; 0 when there were none
    pub fn decisive_win_rate(&self) -> f64 {
        match self.decisive() {
            0 => 0.0,
            decisive => self.candidate_wins as f64 / decisive as f64,
        }
    }

    /// Enough decisive matches, a high enough rate, and no candidate errors.
    pub fn passed(&self, config: &BenchmarkConfig) -> bool {
        self.decisive() >= config.minimum_decisive()
            && self.decisive_win_rate() >= config.pass_win_rate
            && self.candidate_errors == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub index: u32,
    pub seed: u64,
    #[serde(flatten)]
    pub result: MatchResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub candidate: String,
    pub matches: Vec<MatchRecord>,
    pub tally: BenchmarkTally,
    pub minimum_decisive: u32,
    pub decisive_win_rate: f64,
    pub required_rate: f64,
    pub passed: bool,
}

/// Benchmark a built-in controller against the reference bot.
pub fn run_benchmark<W: Write>(
    physics: &PhysicsConfig,
    config: &BenchmarkConfig,
    candidate: ControllerKind,
    out: &mut W,
) -> io::Result<BenchmarkReport> {
    run_benchmark_with(physics, config, |seed| create_controller(candidate, seed), out)
}

/// Benchmark any candidate against the reference bot.
///
/// `make_candidate` is called once per match with that match's candidate seed,
/// so per-match controller state never leaks between matches. Match lines and
/// the summary are written to `out` as they happen.
pub fn run_benchmark_with<W, F>(
    physics: &PhysicsConfig,
    config: &BenchmarkConfig,
    mut make_candidate: F,
    out: &mut W,
) -> io::Result<BenchmarkReport>
where
    W: Write,
    F: FnMut(u64) -> Box<dyn Controller>,
{
    let acceleration = RallyAcceleration {
        max_x_speed: config.max_ball_x_speed,
        max_y_speed: config.max_ball_y_speed,
    };

    let mut tally = BenchmarkTally::default();
    let mut records = Vec::with_capacity(config.matches as usize);
    let mut candidate_name = String::new();

    for index in 0..config.matches {
        let match_seed = config.seed.wrapping_add(u64::from(index));

        let mut reference = ReferenceBot::new(controller_seed(match_seed, REFERENCE_SIDE));
        let mut candidate = make_candidate(controller_seed(match_seed, CANDIDATE_SIDE));
        candidate_name = candidate.name().to_string();

        let match_config = MatchConfig::new(physics.winning_score, match_seed)
            .with_max_frames(config.max_match_frames)
            .with_rally_acceleration(acceleration);
        let result = run_match(physics, match_config, &mut reference, candidate.as_mut());

        tally.record(&result);
        writeln!(
            out,
            "Match {:02}: {} {} - {} {} ({})",
            index + 1,
            reference.name(),
            result.score.left,
            result.score.right,
            candidate_name,
            result.reason
        )?;

        records.push(MatchRecord {
            index,
            seed: match_seed,
            result,
        });
    }

    let report = BenchmarkReport {
        candidate: candidate_name,
        matches: records,
        tally,
        minimum_decisive: config.minimum_decisive(),
        decisive_win_rate: tally.decisive_win_rate(),
        required_rate: config.pass_win_rate,
        passed: tally.passed(config),
    };

    write_summary(&report, out)?;
    tracing::info!(
        candidate = %report.candidate,
        wins = tally.candidate_wins,
        losses = tally.reference_wins,
        draws = tally.draws,
        errors = tally.candidate_errors,
        passed = report.passed,
        "benchmark finished"
    );

    Ok(report)
}

fn write_summary<W: Write>(report: &BenchmarkReport, out: &mut W) -> io::Result<()> {
    let tally = &report.tally;
    let candidate = &report.candidate;

    writeln!(out)?;
    writeln!(out, "Benchmark Summary")?;
    writeln!(out, "-----------------")?;
    writeln!(out, "{:<18}{}", format!("{candidate} wins:"), tally.candidate_wins)?;
    writeln!(out, "{:<18}{}", "ReferenceAI wins:", tally.reference_wins)?;
    writeln!(out, "{:<18}{}", "Draws:", tally.draws)?;
    writeln!(
        out,
        "Decisive matches: {} (minimum required: {})",
        tally.decisive(),
        report.minimum_decisive
    )?;
    writeln!(
        out,
        "{candidate} decisive win rate: {:.2}%",
        report.decisive_win_rate * 100.0
    )?;
    writeln!(out, "Required rate: {:.2}%", report.required_rate * 100.0)?;
    if tally.candidate_errors > 0 {
        writeln!(out, "{candidate} errors: {} (auto-fail)", tally.candidate_errors)?;
    }
    writeln!(out, "Result: {}", if report.passed { "PASS" } else { "FAIL" })?;
    Ok(())
}
