// Tracking bot - simple rule-based baseline

use super::controller::{steer_toward, Controller};
use super::prediction::is_ball_moving_toward;
use crate::error::ControllerError;
use crate::game::{GameState, Move};

/// Baseline opponent that chases the ball's current y position
///
/// - Follows the ball while it is approaching
/// - Drifts back to the middle of the court while it is moving away
/// - No prediction and no randomness
pub struct TrackingBot {
    dead_zone: i32,
}

impl TrackingBot {
    pub fn new() -> Self {
        Self { dead_zone: 8 }
    }
}

impl Default for TrackingBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for TrackingBot {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, ControllerError> {
        let target_y = if is_ball_moving_toward(state) {
            state.ball_y
        } else {
            state.window_height / 2
        };

        Ok(steer_toward(
            target_y as f64,
            state.paddle_center(),
            self.dead_zone,
        ))
    }

    fn name(&self) -> &str {
        "TrackingAI"
    }
}
