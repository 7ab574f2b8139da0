use crate::config::PhysicsConfig;

use super::state::{Court, Side};

/// One side's read-only view of a single frame.
///
/// Built fresh for each side every frame and handed to controllers by
/// reference. It is a copy of the authoritative court state, so nothing a
/// controller does with it can reach the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub window_width: i32,
    pub window_height: i32,
    pub paddle_height: i32,
    /// Pixels a paddle moves per frame
    pub paddle_speed: i32,
    pub my_side: Side,
    pub my_paddle_x: i32,
    /// Top edge of this side's paddle
    pub my_paddle_y: i32,
    pub opponent_paddle_x: i32,
    pub opponent_paddle_y: i32,
    /// Ball center
    pub ball_x: i32,
    pub ball_y: i32,
    pub ball_vx: i32,
    pub ball_vy: i32,
}

impl GameState {
    pub fn observe(court: &Court, side: Side, physics: &PhysicsConfig) -> Self {
        let mine = court.paddle(side);
        let theirs = court.paddle(side.opponent());

        Self {
            window_width: physics.window_width,
            window_height: physics.window_height,
            paddle_height: physics.paddle_height,
            paddle_speed: physics.paddle_speed,
            my_side: side,
            my_paddle_x: mine.x,
            my_paddle_y: mine.y,
            opponent_paddle_x: theirs.x,
            opponent_paddle_y: theirs.y,
            ball_x: court.ball.center_x(),
            ball_y: court.ball.center_y(),
            ball_vx: court.velocity.vx,
            ball_vy: court.velocity.vy,
        }
    }

    pub fn paddle_center(&self) -> i32 {
        self.my_paddle_y + self.paddle_height / 2
    }
}
