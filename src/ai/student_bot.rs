// Student bot - the strategy the benchmark grades
//
// Edit `choose_move` to try your own ideas, then run `pong-bench --mode benchmark`.

use super::controller::{steer_toward, Controller};
use super::prediction::{is_ball_moving_toward, predict_intercept_y};
use crate::error::ControllerError;
use crate::game::{GameState, Move};

/// Within this horizontal distance the bot reacts to the ball itself instead of the prediction
const CLOSE_RANGE: i32 = 120;
/// Vertical speed at which the bot tightens its dead zone
const FAST_BALL_VY: i32 = 6;
const FAST_DEAD_ZONE: i32 = 8;
const SLOW_DEAD_ZONE: i32 = 14;
/// Band around the court center the bot returns to between rallies
const CENTER_BAND: i32 = 12;

#[derive(Default)]
pub struct StudentBot;

impl StudentBot {
    pub fn new() -> Self {
        Self
    }
}

impl Controller for StudentBot {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, ControllerError> {
        let paddle_center = state.paddle_center();

        if is_ball_moving_toward(state) {
            let horizontal_distance = (state.my_paddle_x - state.ball_x).abs();
            let target_y = if horizontal_distance < CLOSE_RANGE {
                state.ball_y as f64
            } else {
                predict_intercept_y(state)
            };

            let dead_zone = if state.ball_vy.abs() >= FAST_BALL_VY {
                FAST_DEAD_ZONE
            } else {
                SLOW_DEAD_ZONE
            };

            return Ok(steer_toward(target_y, paddle_center, dead_zone));
        }

        // Ball is heading away: get back to the middle for the next rally
        let screen_center = state.window_height / 2;
        Ok(steer_toward(screen_center as f64, paddle_center, CENTER_BAND))
    }

    fn name(&self) -> &str {
        "StudentAI"
    }
}
