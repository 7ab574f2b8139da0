// Controller trait shared by humans and AI opponents

use crate::error::ControllerError;
use crate::game::{GameState, Move};

/// Anything that can steer a paddle
///
/// A controller sees one read-only [`GameState`] per frame and answers with a
/// vertical intent. Implementations may keep private state between calls (a
/// reaction delay, a cached target), but one instance belongs to one match.
pub trait Controller {
    /// Decide what the paddle should do this frame
    ///
    /// # Errors
    /// Returning an error forfeits the current match for this side. It never
    /// aborts the surrounding run.
    fn choose_move(&mut self, state: &GameState) -> Result<Move, ControllerError>;

    /// Forget per-match state (called before a rematch)
    fn reset(&mut self) {}

    /// Display name, e.g. "ReferenceAI"
    fn name(&self) -> &str;
}

/// Step toward `target_y` unless the paddle center is already within `dead_zone` of it.
pub(crate) fn steer_toward(target_y: f64, paddle_center: i32, dead_zone: i32) -> Move {
    let center = paddle_center as f64;
    let dead_zone = dead_zone as f64;
    if target_y < center - dead_zone {
        Move::Up
    } else if target_y > center + dead_zone {
        Move::Down
    } else {
        Move::Stay
    }
}
