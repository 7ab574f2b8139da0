// AI module: the controller contract and its variants

mod controller;
mod human;
pub mod prediction;
mod random_bot;
mod reference_bot;
mod student_bot;
mod tracking_bot;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub use controller::Controller;
pub use human::HumanController;
pub use random_bot::RandomBot;
pub use reference_bot::{ReferenceBot, ReferenceBotConfig};
pub use student_bot::StudentBot;
pub use tracking_bot::TrackingBot;

/// Controller selection by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    /// Follows the ball with simple rules
    Tracking,
    /// Deliberately imperfect benchmark baseline
    Reference,
    /// Uniformly random moves
    Random,
    /// User-authored strategy graded by the benchmark
    Student,
}

impl ControllerKind {
    /// Get display name for controller kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ControllerKind::Tracking => "TrackingAI",
            ControllerKind::Reference => "ReferenceAI",
            ControllerKind::Random => "RandomAI",
            ControllerKind::Student => "StudentAI",
        }
    }

    /// Get all selectable controller kinds
    pub fn all() -> [ControllerKind; 4] {
        [
            ControllerKind::Tracking,
            ControllerKind::Reference,
            ControllerKind::Random,
            ControllerKind::Student,
        ]
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            ControllerKind::Tracking => "tracking",
            ControllerKind::Reference => "reference",
            ControllerKind::Random => "random",
            ControllerKind::Student => "student",
        };
        f.write_str(key)
    }
}

impl FromStr for ControllerKind {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key = name.trim().to_lowercase();
        ControllerKind::all()
            .into_iter()
            .find(|kind| kind.to_string() == key)
            .ok_or_else(|| ConfigError::UnknownController {
                name: name.to_string(),
            })
    }
}

/// Create a controller instance from a kind
///
/// Randomized controllers draw from their own generator seeded with `seed`, so
/// the same kind and seed always play the same way.
pub fn create_controller(kind: ControllerKind, seed: u64) -> Box<dyn Controller> {
    match kind {
        ControllerKind::Tracking => Box::new(TrackingBot::new()),
        ControllerKind::Reference => Box::new(ReferenceBot::new(seed)),
        ControllerKind::Random => Box::new(RandomBot::new(seed)),
        ControllerKind::Student => Box::new(StudentBot::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Tracking".parse::<ControllerKind>().unwrap(), ControllerKind::Tracking);
        assert_eq!("  REFERENCE ".parse::<ControllerKind>().unwrap(), ControllerKind::Reference);
        assert_eq!("random".parse::<ControllerKind>().unwrap(), ControllerKind::Random);
        assert_eq!("Student".parse::<ControllerKind>().unwrap(), ControllerKind::Student);
    }

    #[test]
    fn test_unknown_name_lists_valid_set() {
        let err = "minimax".parse::<ControllerKind>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("minimax"));
        for kind in ControllerKind::all() {
            assert!(message.contains(&kind.to_string()));
        }
    }

    #[test]
    fn test_factory_names() {
        for kind in ControllerKind::all() {
            let controller = create_controller(kind, 0);
            assert_eq!(controller.name(), kind.display_name());
        }
        assert!("human".parse::<ControllerKind>().is_err());
    }
}
