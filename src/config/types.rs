// pong-bench configuration types
// Defaults reproduce the classroom game: 800x500 window, first to 7

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.benchmark.validate()?;
        if self.display.target_fps == 0 {
            return Err(ConfigError::out_of_range("display.target_fps", 0, ">= 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Window size in pixels
    pub window_width: i32,
    pub window_height: i32,

    pub paddle_width: i32,
    pub paddle_height: i32,

    // Pixels a paddle moves per frame
    pub paddle_speed: i32,

    // Gap between each paddle and its side of the window
    pub paddle_margin: i32,

    // Ball is a square of this side length
    pub ball_size: i32,

    // Per-axis speed after every serve
    pub ball_start_speed: i32,

    // Vertical speed cap after paddle hits
    pub ball_max_y_speed: i32,

    // Vertical speed added by an edge hit (scaled by distance from paddle center)
    pub hit_spin: i32,

    // Score required to win
    pub winning_score: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 500,
            paddle_width: 12,
            paddle_height: 90,
            paddle_speed: 6,
            paddle_margin: 30,
            ball_size: 14,
            ball_start_speed: 5,
            ball_max_y_speed: 7,
            hit_spin: 3,
            winning_score: 7,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("physics.window_width", self.window_width),
            ("physics.window_height", self.window_height),
            ("physics.paddle_width", self.paddle_width),
            ("physics.paddle_height", self.paddle_height),
            ("physics.paddle_speed", self.paddle_speed),
            ("physics.ball_size", self.ball_size),
            ("physics.ball_start_speed", self.ball_start_speed),
            ("physics.ball_max_y_speed", self.ball_max_y_speed),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::out_of_range(field, value, "> 0"));
            }
        }
        if self.paddle_height > self.window_height {
            return Err(ConfigError::out_of_range(
                "physics.paddle_height",
                self.paddle_height,
                "<= window_height",
            ));
        }
        // Widened so extreme values are rejected rather than overflowing
        let paddle_span = 2 * (i64::from(self.paddle_margin) + i64::from(self.paddle_width));
        if self.paddle_margin < 0 || paddle_span >= i64::from(self.window_width) {
            return Err(ConfigError::out_of_range(
                "physics.paddle_margin",
                self.paddle_margin,
                "paddles inside the window without overlapping",
            ));
        }

        // Per-frame movement stays smaller than the court
        let bounded = [
            ("physics.ball_size", self.ball_size, self.window_height, "< window_height"),
            ("physics.paddle_speed", self.paddle_speed, self.window_height, "< window_height"),
            ("physics.ball_start_speed", self.ball_start_speed, self.window_width / 2, "< window_width / 2"),
            ("physics.ball_max_y_speed", self.ball_max_y_speed, self.window_height, "< window_height"),
        ];
        for (field, value, limit, expected) in bounded {
            if value >= limit {
                return Err(ConfigError::out_of_range(field, value, expected));
            }
        }
        if !(0..=self.paddle_height).contains(&self.hit_spin) {
            return Err(ConfigError::out_of_range(
                "physics.hit_spin",
                self.hit_spin,
                "0 - paddle_height",
            ));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::out_of_range("physics.winning_score", 0, ">= 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    // Matches per benchmark run
    pub matches: u32,

    // Candidate's required share of decisive matches (0.0 - 1.0)
    pub pass_win_rate: f64,

    // Frame ceiling per match (2700 = 45s at 60 FPS)
    pub max_match_frames: u32,

    // Match i is seeded with seed + i
    pub seed: u64,

    // Rally acceleration caps (speed bumps after every paddle hit)
    pub max_ball_x_speed: i32,
    pub max_ball_y_speed: i32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            matches: 25,
            pass_win_rate: 0.60,
            max_match_frames: 60 * 45,
            seed: 2026,
            max_ball_x_speed: 20,
            max_ball_y_speed: 14,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matches == 0 {
            return Err(ConfigError::out_of_range("benchmark.matches", 0, ">= 1"));
        }
        if !(0.0..=1.0).contains(&self.pass_win_rate) {
            return Err(ConfigError::out_of_range(
                "benchmark.pass_win_rate",
                self.pass_win_rate,
                "0.0 - 1.0",
            ));
        }
        if self.max_match_frames == 0 {
            return Err(ConfigError::out_of_range("benchmark.max_match_frames", 0, ">= 1"));
        }
        if self.max_ball_x_speed <= 0 || self.max_ball_y_speed <= 0 {
            return Err(ConfigError::out_of_range(
                "benchmark.max_ball_speed",
                format!("{}/{}", self.max_ball_x_speed, self.max_ball_y_speed),
                "> 0",
            ));
        }
        Ok(())
    }

    /// Decisive matches needed before the win rate counts.
    pub fn minimum_decisive(&self) -> u32 {
        (self.matches / 4).max(5)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second for interactive modes
    pub target_fps: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}
