use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

use super::state::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Rematch,
    LeftPaddleUp,
    LeftPaddleDown,
    RightPaddleUp,
    RightPaddleDown,
}

/// Raw up/down key state for one paddle during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    /// Collapse this frame's actions into the key state for one side's paddle.
    pub fn from_actions(actions: &[InputAction], side: Side) -> Self {
        let (up_action, down_action) = match side {
            Side::Left => (InputAction::LeftPaddleUp, InputAction::LeftPaddleDown),
            Side::Right => (InputAction::RightPaddleUp, InputAction::RightPaddleDown),
        };
        Self {
            up: actions.contains(&up_action),
            down: actions.contains(&down_action),
        }
    }
}

/// Drain pending terminal key presses and map them to actions.
///
/// Terminals only report presses (and auto-repeat), so holding a key shows up
/// as a stream of presses rather than a held state.
pub fn poll_input() -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Rematch,
                KeyCode::Char('w') | KeyCode::Char('W') => InputAction::LeftPaddleUp,
                KeyCode::Char('s') | KeyCode::Char('S') => InputAction::LeftPaddleDown,
                KeyCode::Up => InputAction::RightPaddleUp,
                KeyCode::Down => InputAction::RightPaddleDown,
                _ => continue,
            };
            actions.push(action);
        }
    }

    Ok(actions)
}
