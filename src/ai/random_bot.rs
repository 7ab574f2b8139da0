// Random bot - weakest possible opponent, useful for first tests

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::controller::Controller;
use crate::error::ControllerError;
use crate::game::{GameState, Move};

pub struct RandomBot {
    rng: ChaCha8Rng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Controller for RandomBot {
    fn choose_move(&mut self, _state: &GameState) -> Result<Move, ControllerError> {
        Ok(*Move::ALL.choose(&mut self.rng).unwrap_or(&Move::Stay))
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
