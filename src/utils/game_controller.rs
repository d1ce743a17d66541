//! Explicit turn loop around a position.
//!
//! Each side is either driven by a human, who supplies origin and destination
//! squares, or by a `MoveStrategy`. The controller owns the current position
//! and the log of played moves.

use tracing::{debug, info, warn};

use crate::engines::engine_trait::{MoveStrategy, SearchOutcome};
use crate::game_state::chess_types::{Alliance, Square};
use crate::game_state::player::MoveStatus;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

pub enum PlayerControl {
    Human,
    Engine(Box<dyn MoveStrategy>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Alliance },
    Stalemate,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One engine turn: what the engine chose and what became of it. `status`
/// is `None` when the engine had no move to offer.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineTurn {
    pub outcome: SearchOutcome,
    pub status: Option<MoveStatus>,
}

impl EngineTurn {
    #[inline]
    pub fn is_played(&self) -> bool {
        self.status.is_some_and(MoveStatus::is_done)
    }
}

pub struct GameController {
    position: Position,
    move_log: Vec<Move>,
    white: PlayerControl,
    black: PlayerControl,
}

impl GameController {
    pub fn new(position: Position, white: PlayerControl, black: PlayerControl) -> Self {
        Self {
            position,
            move_log: Vec::new(),
            white,
            black,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn game_status(&self) -> GameStatus {
        let player = self.position.current_player();
        if player.is_in_checkmate() {
            GameStatus::Checkmate {
                winner: player.alliance().opposite(),
            }
        } else if player.is_in_stalemate() {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        }
    }

    /// Play the side to move's move from `origin` to `destination`. Squares
    /// that match no generated move yield `IllegalMove`.
    pub fn human_move(&mut self, origin: Square, destination: Square) -> MoveStatus {
        match self.position.find_move(origin, destination) {
            Some(mv) => self.apply(&mv),
            None => MoveStatus::IllegalMove,
        }
    }

    /// Let the engine of the side to move choose and play. `None` when that
    /// side is human-controlled.
    pub fn engine_move(&mut self) -> Option<EngineTurn> {
        let side = self.position.side_to_move();
        let control = match side {
            Alliance::White => &mut self.white,
            Alliance::Black => &mut self.black,
        };
        let PlayerControl::Engine(engine) = control else {
            return None;
        };
        let outcome = engine.choose_move(&self.position);
        let status = outcome.best_move.map(|mv| {
            let status = self.apply(&mv);
            if status.is_done() {
                debug!(%side, mv = %mv, "engine move");
            } else {
                warn!(%side, mv = %mv, ?status, "engine move rejected");
            }
            status
        });
        Some(EngineTurn { outcome, status })
    }

    /// Run engine turns until the game ends, a human is to move, an engine
    /// finds nothing to play or offers a rejected move, or `max_plies` moves
    /// have been made.
    pub fn play_until_finished(&mut self, max_plies: usize) -> GameStatus {
        let mut plies = 0;
        while plies < max_plies && !self.game_status().is_finished() {
            let played = self.engine_move().is_some_and(|turn| turn.is_played());
            if !played {
                break;
            }
            plies += 1;
        }
        let status = self.game_status();
        info!(plies, ?status, "game loop stopped");
        status
    }

    fn apply(&mut self, mv: &Move) -> MoveStatus {
        let transition = self.position.current_player().make_move(mv);
        let status = transition.status();
        if status.is_done() {
            let played = *transition.attempted_move();
            self.position = transition.into_position();
            self.move_log.push(played);
        }
        status
    }
}
