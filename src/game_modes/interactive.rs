use std::fmt;
use std::time::Instant;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::ai::{create_controller, Controller, ControllerKind, HumanController};
use crate::config::Config;
use crate::game::{poll_input, InputAction, KeyState, Side};
use crate::ui::{self, MatchOverlay};

use super::common::{frame_duration, limit_frame_rate};
use super::headless::{Match, MatchConfig, MatchReason, MatchStatus, Winner};

/// Who controls one paddle in an interactive game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Ai(ControllerKind),
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.write_str("Human"),
            Seat::Ai(kind) => f.write_str(kind.display_name()),
        }
    }
}

/// A seated controller. Humans are kept concrete so key state can be fed in.
enum Player {
    Human(HumanController),
    Ai(Box<dyn Controller>),
}

impl Player {
    fn seat(seat: Seat, seed: u64) -> Self {
        match seat {
            Seat::Human => Player::Human(HumanController::new()),
            Seat::Ai(kind) => Player::Ai(create_controller(kind, seed)),
        }
    }

    fn feed(&mut self, actions: &[InputAction], side: Side) {
        if let Player::Human(human) = self {
            human.press(KeyState::from_actions(actions, side));
        }
    }

    fn controller(&mut self) -> &mut dyn Controller {
        match self {
            Player::Human(human) => human,
            Player::Ai(bot) => bot.as_mut(),
        }
    }
}

/// Status line shown above the court, e.g. "Mode: Human vs TrackingAI"
pub fn status_text(left: Seat, right: Seat) -> String {
    match (left, right) {
        (Seat::Human, Seat::Human) => "Mode: PVP (2 players)".to_string(),
        (left, right) => format!("Mode: {} vs {}", left, right),
    }
}

fn result_message(left: Seat, right: Seat, winner: Winner, reason: MatchReason) -> MatchOverlay {
    let headline = match (winner, left, right) {
        (Winner::Draw, _, _) => "Draw".to_string(),
        (Winner::Left, Seat::Human, Seat::Human) => "Left Player Wins!".to_string(),
        (Winner::Right, Seat::Human, Seat::Human) => "Right Player Wins!".to_string(),
        (Winner::Left, Seat::Human, _) => "You Win!".to_string(),
        (Winner::Left, seat, _) | (Winner::Right, _, seat) => format!("{} Wins!", seat),
    };

    let overlay = MatchOverlay::new(headline);
    match reason {
        MatchReason::LeftAiError | MatchReason::RightAiError => overlay.forfeited(reason),
        _ => overlay,
    }
}

/// Play on the terminal until the user quits.
///
/// Runs the same match state machine as the benchmark, one step per rendered
/// frame, with no frame ceiling.
pub fn run_interactive<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    left_seat: Seat,
    right_seat: Seat,
) -> Result<()> {
    tracing::info!(left = %left_seat, right = %right_seat, "interactive game started");

    let budget = frame_duration(config.display.target_fps);
    let status = status_text(left_seat, right_seat);

    // Interactive play is not meant to be reproducible
    let new_match = || {
        Match::new(
            config.physics.clone(),
            MatchConfig::new(config.physics.winning_score, rand::random()),
        )
    };
    let mut game = new_match();
    let seed: u64 = rand::random();
    let mut left = Player::seat(left_seat, seed);
    let mut right = Player::seat(right_seat, !seed);

    loop {
        let now = Instant::now();

        let actions = poll_input()?;
        if actions.contains(&InputAction::Quit) {
            return Ok(());
        }

        let overlay = match game.status() {
            MatchStatus::Running => {
                left.feed(&actions, Side::Left);
                right.feed(&actions, Side::Right);
                game.step(left.controller(), right.controller());
                None
            }
            MatchStatus::Finished(result) => {
                if actions.contains(&InputAction::Rematch) {
                    game = new_match();
                    left.controller().reset();
                    right.controller().reset();
                    None
                } else {
                    Some(result_message(left_seat, right_seat, result.winner, result.reason))
                }
            }
        };

        terminal.draw(|f| {
            ui::render(f, game.court(), &config.physics, &status, overlay.as_ref())
        })?;

        limit_frame_rate(now, budget);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(Seat::Human, Seat::Human), "Mode: PVP (2 players)");
        assert_eq!(
            status_text(Seat::Human, Seat::Ai(ControllerKind::Tracking)),
            "Mode: Human vs TrackingAI"
        );
        assert_eq!(
            status_text(
                Seat::Ai(ControllerKind::Reference),
                Seat::Ai(ControllerKind::Student)
            ),
            "Mode: ReferenceAI vs StudentAI"
        );
    }

    #[test]
    fn test_result_headlines() {
        let tracking = Seat::Ai(ControllerKind::Tracking);
        let msg = result_message(Seat::Human, tracking, Winner::Left, MatchReason::Score);
        assert_eq!(msg.headline, "You Win!");
        assert_eq!(msg.forfeit, None);
        let msg = result_message(Seat::Human, tracking, Winner::Right, MatchReason::Score);
        assert_eq!(msg.headline, "TrackingAI Wins!");
        let msg = result_message(Seat::Human, Seat::Human, Winner::Right, MatchReason::Score);
        assert_eq!(msg.headline, "Right Player Wins!");
        let msg = result_message(Seat::Human, tracking, Winner::Left, MatchReason::RightAiError);
        assert!(msg.forfeit.is_some_and(|title| title.contains("right_ai_error")));
    }
}
