//! Random-move engine.
//!
//! Selects uniformly among moves that pass the self-check filter. Used for
//! diagnostics, integration testing and as a weak opponent.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{MoveSource, MoveStrategy, SearchOutcome};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, position: &Position) -> SearchOutcome {
        let start = Instant::now();
        let player = position.current_player();
        let playable: Vec<Move> = player
            .legal_moves()
            .iter()
            .filter(|mv| player.make_move(mv).status().is_done())
            .copied()
            .collect();

        let Some(chosen) = playable.choose(&mut self.rng).copied() else {
            return SearchOutcome::no_move(MoveSource::Random, start.elapsed());
        };
        SearchOutcome {
            best_move: Some(chosen),
            score: None,
            source: MoveSource::Random,
            boards_evaluated: playable.len() as u64,
            elapsed: start.elapsed(),
        }
    }
}
