// Reference bot - the deliberately beatable benchmark opponent

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::controller::{steer_toward, Controller};
use super::prediction::is_ball_moving_toward;
use crate::error::ControllerError;
use crate::game::{GameState, Move};

/// Tuning for the reference bot's handicaps
#[derive(Debug, Clone)]
pub struct ReferenceBotConfig {
    pub dead_zone: i32,           // Wide dead zone: sloppy positioning
    pub mistake_rate: f64,        // Chance a fresh decision is replaced by a random move
    pub min_hold_frames: u32,     // Reaction delay after every decision, in frames
    pub max_hold_frames: u32,
}

impl Default for ReferenceBotConfig {
    fn default() -> Self {
        Self {
            dead_zone: 24,
            mistake_rate: 0.18,
            min_hold_frames: 2,
            max_hold_frames: 4,
        }
    }
}

/// Intentionally weak baseline used as the fixed benchmark opponent
///
/// It tracks the current ball y (no prediction), holds each decision for a few
/// frames, and sometimes picks a random move instead of the right one. The
/// hold counter and last move live in the instance, so every match needs a
/// fresh bot.
pub struct ReferenceBot {
    config: ReferenceBotConfig,

    // Frames left before the next decision
    hold_frames: u32,
    last_move: Move,

    rng: ChaCha8Rng,
}

impl ReferenceBot {
    pub fn new(seed: u64) -> Self {
        Self::with_config(ReferenceBotConfig::default(), seed)
    }

    pub fn with_config(config: ReferenceBotConfig, seed: u64) -> Self {
        Self {
            config,
            hold_frames: 0,
            last_move: Move::Stay,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn decide(&mut self, state: &GameState) -> Move {
        let target_y = if is_ball_moving_toward(state) {
            state.ball_y
        } else {
            state.window_height / 2
        };

        let mut mv = steer_toward(target_y as f64, state.paddle_center(), self.config.dead_zone);

        if self.rng.gen::<f64>() < self.config.mistake_rate {
            mv = *Move::ALL.choose(&mut self.rng).unwrap_or(&Move::Stay);
        }
        mv
    }
}

impl Controller for ReferenceBot {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, ControllerError> {
        if self.hold_frames > 0 {
            self.hold_frames -= 1;
            return Ok(self.last_move);
        }

        self.last_move = self.decide(state);
        self.hold_frames = self
            .rng
            .gen_range(self.config.min_hold_frames..=self.config.max_hold_frames);

        Ok(self.last_move)
    }

    fn reset(&mut self) {
        self.hold_frames = 0;
        self.last_move = Move::Stay;
    }

    fn name(&self) -> &str {
        "ReferenceAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Side;

    fn state(ball_y: i32) -> GameState {
        GameState {
            window_width: 800,
            window_height: 500,
            paddle_height: 90,
            paddle_speed: 6,
            my_side: Side::Left,
            my_paddle_x: 30,
            my_paddle_y: 205,
            opponent_paddle_x: 758,
            opponent_paddle_y: 205,
            ball_x: 400,
            ball_y,
            ball_vx: -5,
            ball_vy: 0,
        }
    }

    #[test]
    fn test_holds_decision_between_reactions() {
        let config = ReferenceBotConfig {
            mistake_rate: 0.0,
            min_hold_frames: 3,
            max_hold_frames: 3,
            ..Default::default()
        };
        let mut bot = ReferenceBot::with_config(config, 1);

        // Ball far above: decide Up, then keep repeating it for 3 frames even
        // though the ball is now below
        assert_eq!(bot.choose_move(&state(50)).unwrap(), Move::Up);
        for _ in 0..3 {
            assert_eq!(bot.choose_move(&state(450)).unwrap(), Move::Up);
        }
        assert_eq!(bot.choose_move(&state(450)).unwrap(), Move::Down);
    }

    #[test]
    fn test_wide_dead_zone() {
        let config = ReferenceBotConfig {
            mistake_rate: 0.0,
            ..Default::default()
        };
        let mut bot = ReferenceBot::with_config(config, 1);
        // paddle center 250, ball 20px away: inside the 24px dead zone
        assert_eq!(bot.choose_move(&state(270)).unwrap(), Move::Stay);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = ReferenceBot::new(99);
        let mut b = ReferenceBot::new(99);
        for y in (0..500).step_by(7) {
            assert_eq!(
                a.choose_move(&state(y)).unwrap(),
                b.choose_move(&state(y)).unwrap()
            );
        }
    }

    #[test]
    fn test_reset_clears_hold() {
        let config = ReferenceBotConfig {
            mistake_rate: 0.0,
            min_hold_frames: 4,
            max_hold_frames: 4,
            ..Default::default()
        };
        let mut bot = ReferenceBot::with_config(config, 3);
        assert_eq!(bot.choose_move(&state(50)).unwrap(), Move::Up);
        bot.reset();
        assert_eq!(bot.choose_move(&state(450)).unwrap(), Move::Down);
    }
}
