use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use pong_bench::ai::ControllerKind;
use pong_bench::config::{self, Config};
use pong_bench::debug::{self, LogTarget};
use pong_bench::error::ConfigError;
use pong_bench::game_modes::{run_benchmark, run_interactive, Seat};
use pong_bench::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two players on one keyboard
    Pvp,
    /// Left human vs right AI (--opponent)
    HumanVsAi,
    /// Left human vs StudentAI
    HumanVsStudent,
    /// Watch --left-ai play --right-ai
    AiVsAi,
    /// Headless pass/fail test of --candidate against ReferenceAI
    Benchmark,
}

#[derive(Parser, Debug)]
#[command(name = "pong-bench")]
#[command(about = "Simple Pong with AI opponents and a pass/fail AI benchmark", long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Mode::HumanVsAi)]
    mode: Mode,

    /// AI strategy for the right paddle in human-vs-ai mode
    #[arg(long, default_value = "tracking", value_parser = parse_kind)]
    opponent: ControllerKind,

    /// Left AI in ai-vs-ai mode
    #[arg(long, default_value = "reference", value_parser = parse_kind)]
    left_ai: ControllerKind,

    /// Right AI in ai-vs-ai mode
    #[arg(long, default_value = "student", value_parser = parse_kind)]
    right_ai: ControllerKind,

    /// Controller graded in benchmark mode
    #[arg(long, default_value = "student", value_parser = parse_kind)]
    candidate: ControllerKind,

    /// Number of matches for benchmark mode
    #[arg(long)]
    matches: Option<u32>,

    /// Required decisive-match win rate to pass benchmark mode
    #[arg(long)]
    pass_win_rate: Option<f64>,

    /// Frame limit for each benchmark match
    #[arg(long)]
    max_match_frames: Option<u32>,

    /// Base random seed for benchmark mode
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (defaults to the per-user config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the benchmark report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose logging (stderr in benchmark mode, a temp file otherwise)
    #[arg(long)]
    debug: bool,
}

fn parse_kind(name: &str) -> Result<ControllerKind, ConfigError> {
    name.parse()
}

impl Cli {
    /// Resolve the effective configuration: file first, then flag overrides.
    fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config_from(path)?,
            None => config::load_config()?,
        };

        let bench = &mut config.benchmark;
        if let Some(matches) = self.matches {
            bench.matches = matches;
        }
        if let Some(rate) = self.pass_win_rate {
            bench.pass_win_rate = rate;
        }
        if let Some(frames) = self.max_match_frames {
            bench.max_match_frames = frames;
        }
        if let Some(seed) = self.seed {
            bench.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let target = match cli.mode {
        Mode::Benchmark => LogTarget::Stderr,
        _ => LogTarget::File,
    };
    if let Err(e) = debug::init(cli.debug, target) {
        eprintln!("Warning: could not set up logging: {}", e);
    }

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let outcome = match cli.mode {
        Mode::Benchmark => benchmark(&cli, &config),
        Mode::Pvp => play(&config, Seat::Human, Seat::Human),
        Mode::HumanVsAi => play(&config, Seat::Human, Seat::Ai(cli.opponent)),
        Mode::HumanVsStudent => play(&config, Seat::Human, Seat::Ai(ControllerKind::Student)),
        Mode::AiVsAi => play(&config, Seat::Ai(cli.left_ai), Seat::Ai(cli.right_ai)),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn benchmark(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = run_benchmark(&config.physics, &config.benchmark, cli.candidate, &mut out)?;
    out.flush()?;

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    Ok(if report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn play(config: &Config, left: Seat, right: Seat) -> Result<ExitCode> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = splash(&mut terminal, config)
        .and_then(|_| run_interactive(&mut terminal, config, left, right));

    // Restore terminal even if the game loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|_| ExitCode::SUCCESS)
}

fn splash<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, config: &Config) -> Result<()> {
    let text = format!("Pong - First to {}", config.physics.winning_score);
    terminal.draw(|f| ui::render_banner(f, &text))?;
    std::thread::sleep(Duration::from_millis(1200));
    Ok(())
}
