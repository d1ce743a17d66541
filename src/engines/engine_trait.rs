//! Engine abstraction layer used by the game controller.
//!
//! Every move chooser returns a `SearchOutcome`, so callers can swap search
//! strategies at runtime behind a single trait object.

use std::time::Duration;

use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

/// Where a chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    Book,
    Search,
    Random,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// `None` when the side to move has no playable move.
    pub best_move: Option<Move>,
    /// White-positive score of the chosen line; `None` for book and random picks.
    pub score: Option<i32>,
    pub source: MoveSource,
    pub boards_evaluated: u64,
    pub elapsed: Duration,
}

impl SearchOutcome {
    pub fn no_move(source: MoveSource, elapsed: Duration) -> Self {
        Self {
            best_move: None,
            score: None,
            source,
            boards_evaluated: 0,
            elapsed,
        }
    }
}

pub trait MoveStrategy: Send {
    fn name(&self) -> &str;

    fn choose_move(&mut self, position: &Position) -> SearchOutcome;
}
