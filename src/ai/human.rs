// Human adapter - turns raw key state into the controller contract

use super::controller::Controller;
use crate::error::ControllerError;
use crate::game::{GameState, KeyState, Move};

/// Paddle driven by the keyboard
///
/// The interactive loop hands it the latest [`KeyState`] before each frame.
/// Holding both keys cancels out.
#[derive(Default)]
pub struct HumanController {
    keys: KeyState,
}

impl HumanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, keys: KeyState) {
        self.keys = keys;
    }
}

impl Controller for HumanController {
    fn choose_move(&mut self, _state: &GameState) -> Result<Move, ControllerError> {
        let intent = i32::from(self.keys.down) - i32::from(self.keys.up);
        Ok(Move::from(intent))
    }

    fn reset(&mut self) {
        self.keys = KeyState::default();
    }

    fn name(&self) -> &str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Side;

    #[test]
    fn test_keys_map_to_moves() {
        let state = GameState {
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
            ball_y: 250,
            ball_vx: 5,
            ball_vy: 5,
        };
        let mut human = HumanController::new();
        assert_eq!(human.choose_move(&state).unwrap(), Move::Stay);

        human.press(KeyState { up: true, down: false });
        assert_eq!(human.choose_move(&state).unwrap(), Move::Up);

        human.press(KeyState { up: false, down: true });
        assert_eq!(human.choose_move(&state).unwrap(), Move::Down);

        human.press(KeyState { up: true, down: true });
        assert_eq!(human.choose_move(&state).unwrap(), Move::Stay);
    }
}
