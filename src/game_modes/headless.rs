//! Match runner: drives the physics engine with two controllers, no rendering.
//!
//! A [`Match`] owns the authoritative court and its random source. Each call to
//! [`Match::step`] plays one frame; the interactive front-end calls it once per
//! rendered frame, [`run_match`] calls it in a tight loop.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::ai::Controller;
use crate::config::PhysicsConfig;
use crate::game::{physics, Court, GameState, Score, Side};

/// Rally speed-up applied after each paddle return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RallyAcceleration {
    pub max_x_speed: i32,
    pub max_y_speed: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// First side to reach this score wins
    pub win_score: u32,
    /// Frame ceiling; `None` plays until someone wins
    pub max_frames: Option<u32>,
    /// Seeds the serve directions
    pub seed: u64,
    pub rally_acceleration: Option<RallyAcceleration>,
}

impl MatchConfig {
    pub fn new(win_score: u32, seed: u64) -> Self {
        Self {
            win_score,
            max_frames: None,
            seed,
            rally_acceleration: None,
        }
    }

    pub fn with_max_frames(mut self, max_frames: u32) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    pub fn with_rally_acceleration(mut self, acceleration: RallyAcceleration) -> Self {
        self.rally_acceleration = Some(acceleration);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Left,
    Right,
    Draw,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Winner::Left,
            Side::Right => Winner::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    Score,
    FrameLimit,
    LeftAiError,
    RightAiError,
}

impl MatchReason {
    fn controller_error(side: Side) -> Self {
        match side {
            Side::Left => MatchReason::LeftAiError,
            Side::Right => MatchReason::RightAiError,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchReason::Score => "score",
            MatchReason::FrameLimit => "frame_limit",
            MatchReason::LeftAiError => "left_ai_error",
            MatchReason::RightAiError => "right_ai_error",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Winner,
    pub score: Score,
    pub reason: MatchReason,
    /// Frames of physics that were played
    pub frames: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Running,
    Finished(MatchResult),
}

pub struct Match {
    physics: PhysicsConfig,
    config: MatchConfig,
    court: Court,
    rng: ChaCha8Rng,
    frames: u32,
    status: MatchStatus,
}

impl Match {
    pub fn new(physics: PhysicsConfig, config: MatchConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let court = Court::new(&physics, &mut rng);
        Self {
            physics,
            config,
            court,
            rng,
            frames: 0,
            status: MatchStatus::Running,
        }
    }

    /// Read-only view of the authoritative state, for drawing
    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn result(&self) -> Option<MatchResult> {
        match self.status {
            MatchStatus::Running => None,
            MatchStatus::Finished(result) => Some(result),
        }
    }

    /// Play one frame.
    ///
    /// A controller error ends the match on the spot in favour of the other
    /// side, before any physics runs for this frame. Stepping a finished match
    /// does nothing.
    pub fn step(&mut self, left: &mut dyn Controller, right: &mut dyn Controller) -> MatchStatus {
        if let MatchStatus::Finished(_) = self.status {
            return self.status;
        }

        let left_state = GameState::observe(&self.court, Side::Left, &self.physics);
        let right_state = GameState::observe(&self.court, Side::Right, &self.physics);

        let left_move = match left.choose_move(&left_state) {
            Ok(mv) => mv,
            Err(e) => return self.forfeit(Side::Left, &e),
        };
        let right_move = match right.choose_move(&right_state) {
            Ok(mv) => mv,
            Err(e) => return self.forfeit(Side::Right, &e),
        };

        physics::move_paddle(&mut self.court.left_paddle, left_move, &self.physics);
        physics::move_paddle(&mut self.court.right_paddle, right_move, &self.physics);

        let events = physics::update_with_events(&mut self.court, &self.physics, &mut self.rng);

        if let Some(acceleration) = self.config.rally_acceleration {
            if events.rally_hit() {
                accelerate_rally(&mut self.court, acceleration);
            }
        }

        self.frames += 1;

        let score = self.court.score;
        let win_reached = score.left >= self.config.win_score || score.right >= self.config.win_score;
        let out_of_time = self.config.max_frames.is_some_and(|max| self.frames >= max);

        if win_reached || out_of_time {
            let (winner, reason) = match score.leader() {
                Some(side) => (Winner::from(side), MatchReason::Score),
                None => (Winner::Draw, MatchReason::FrameLimit),
            };
            self.finish(MatchResult {
                winner,
                score,
                reason,
                frames: self.frames,
            });
        }

        self.status
    }

    fn forfeit(&mut self, side: Side, error: &crate::error::ControllerError) -> MatchStatus {
        tracing::warn!(%side, frame = self.frames, %error, "controller error, match forfeited");
        self.finish(MatchResult {
            winner: Winner::from(side.opponent()),
            score: self.court.score,
            reason: MatchReason::controller_error(side),
            frames: self.frames,
        });
        self.status
    }

    fn finish(&mut self, result: MatchResult) {
        tracing::debug!(
            winner = ?result.winner,
            left = result.score.left,
            right = result.score.right,
            reason = %result.reason,
            frames = result.frames,
            "match finished"
        );
        self.status = MatchStatus::Finished(result);
    }
}

/// Bump ball speed by one unit per axis, up to the caps.
///
/// Keeps long benchmark rallies from running out the clock. A perfectly flat
/// ball (vy == 0) stays flat.
fn accelerate_rally(court: &mut Court, acceleration: RallyAcceleration) {
    let v = &mut court.velocity;
    if v.vx.abs() < acceleration.max_x_speed {
        v.vx += v.vx.signum();
    }
    if v.vy != 0 && v.vy.abs() < acceleration.max_y_speed {
        v.vy += v.vy.signum();
    }
}

/// Play a whole match without rendering and report how it ended.
///
/// Terminates as long as `config.max_frames` is set or someone eventually wins.
pub fn run_match(
    physics: &PhysicsConfig,
    config: MatchConfig,
    left: &mut dyn Controller,
    right: &mut dyn Controller,
) -> MatchResult {
    tracing::debug!(left = left.name(), right = right.name(), seed = config.seed, "match started");
    let mut game = Match::new(physics.clone(), config);
    loop {
        if let MatchStatus::Finished(result) = game.step(left, right) {
            return result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{create_controller, ControllerKind, TrackingBot};
    use crate::error::ControllerError;
    use crate::game::Move;

    /// Errors after `ok_calls` successful decisions
    struct FailingController {
        ok_calls: u32,
        calls: u32,
    }

    impl FailingController {
        fn after(ok_calls: u32) -> Self {
            Self { ok_calls, calls: 0 }
        }
    }

    impl Controller for FailingController {
        fn choose_move(&mut self, _state: &GameState) -> Result<Move, ControllerError> {
            self.calls += 1;
            if self.calls > self.ok_calls {
                Err(ControllerError::failed("Broken", "boom"))
            } else {
                Ok(Move::Stay)
            }
        }

        fn name(&self) -> &str {
            "Broken"
        }
    }

    struct Idle;

    impl Controller for Idle {
        fn choose_move(&mut self, _state: &GameState) -> Result<Move, ControllerError> {
            Ok(Move::Stay)
        }

        fn name(&self) -> &str {
            "Idle"
        }
    }

    fn config(seed: u64) -> MatchConfig {
        MatchConfig::new(7, seed).with_max_frames(2700)
    }

    #[test]
    fn test_left_error_on_first_call() {
        let physics = PhysicsConfig::default();
        let mut game = Match::new(physics, config(1));
        let ball_before = game.court().ball;

        let mut left = FailingController::after(0);
        let mut right = TrackingBot::new();
        let status = game.step(&mut left, &mut right);

        let MatchStatus::Finished(result) = status else {
            panic!("match should be over");
        };
        assert_eq!(result.winner, Winner::Right);
        assert_eq!(result.reason, MatchReason::LeftAiError);
        assert_eq!(result.frames, 0);
        assert_eq!(result.score, Score::default());
        // No physics ran on the error frame
        assert_eq!(game.court().ball, ball_before);
    }

    #[test]
    fn test_right_error_mid_match() {
        let physics = PhysicsConfig::default();
        let mut left = TrackingBot::new();
        let mut right = FailingController::after(10);
        let result = run_match(&physics, config(3), &mut left, &mut right);
        assert_eq!(result.winner, Winner::Left);
        assert_eq!(result.reason, MatchReason::RightAiError);
        assert_eq!(result.frames, 10);
    }

    #[test]
    fn test_finished_match_ignores_further_steps() {
        let physics = PhysicsConfig::default();
        let mut game = Match::new(physics, config(1));
        let mut left = FailingController::after(0);
        let mut right = Idle;
        let first = game.step(&mut left, &mut right);
        let second = game.step(&mut Idle, &mut Idle);
        assert_eq!(first, second);
        assert_eq!(game.frames(), 0);
    }

    #[test]
    fn test_idle_players_reach_win_score() {
        // Nobody moves, so serves that miss the paddles decide it quickly
        let physics = PhysicsConfig::default();
        let result = run_match(&physics, MatchConfig::new(3, 11), &mut Idle, &mut Idle);
        assert_eq!(result.reason, MatchReason::Score);
        assert_eq!(result.score.left.max(result.score.right), 3);
        assert_ne!(result.winner, Winner::Draw);
    }

    #[test]
    fn test_frame_limit_draw() {
        let physics = PhysicsConfig::default();
        let cfg = MatchConfig::new(7, 5).with_max_frames(10);
        let result = run_match(&physics, cfg, &mut Idle, &mut Idle);
        // The first serve cannot reach a goal line in 10 frames
        assert_eq!(result.frames, 10);
        assert_eq!(result.winner, Winner::Draw);
        assert_eq!(result.reason, MatchReason::FrameLimit);
        assert_eq!(result.score, Score::default());
    }

    #[test]
    fn test_matches_terminate_within_ceiling() {
        let physics = PhysicsConfig::default();
        for seed in 0..6 {
            for (l, r) in [
                (ControllerKind::Reference, ControllerKind::Student),
                (ControllerKind::Random, ControllerKind::Tracking),
            ] {
                let mut left = create_controller(l, seed);
                let mut right = create_controller(r, seed + 100);
                let cfg = MatchConfig::new(7, seed).with_max_frames(600);
                let result = run_match(&physics, cfg, left.as_mut(), right.as_mut());
                assert!(result.frames <= 600);
                let top = result.score.left.max(result.score.right);
                assert!(top == 7 || result.frames == 600, "{result:?}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_match() {
        let physics = PhysicsConfig::default();
        let play = || {
            let mut left = create_controller(ControllerKind::Reference, 42);
            let mut right = create_controller(ControllerKind::Random, 43);
            let cfg = config(2026).with_rally_acceleration(RallyAcceleration {
                max_x_speed: 20,
                max_y_speed: 14,
            });
            run_match(&physics, cfg, left.as_mut(), right.as_mut())
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_rally_acceleration_caps() {
        let physics = PhysicsConfig::default();
        let mut court = Court::new(&physics, &mut ChaCha8Rng::seed_from_u64(0));
        let caps = RallyAcceleration {
            max_x_speed: 20,
            max_y_speed: 14,
        };

        court.velocity = crate::game::Velocity::new(-5, 3);
        accelerate_rally(&mut court, caps);
        assert_eq!(court.velocity, crate::game::Velocity::new(-6, 4));

        court.velocity = crate::game::Velocity::new(20, -14);
        accelerate_rally(&mut court, caps);
        assert_eq!(court.velocity, crate::game::Velocity::new(20, -14));

        court.velocity = crate::game::Velocity::new(7, 0);
        accelerate_rally(&mut court, caps);
        assert_eq!(court.velocity, crate::game::Velocity::new(8, 0));
    }
}
