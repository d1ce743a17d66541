//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type across the crate. Position
//! construction and text parsing fail with it; illegal move attempts do not,
//! they are reported through `MoveTransition` instead.

use thiserror::Error;

use crate::game_state::chess_types::{Alliance, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A side owns zero or several kings. No game can be analysed from here.
    #[error("{alliance} must have exactly one king, found {count}")]
    InvalidKingCount { alliance: Alliance, count: usize },

    /// The sentinel null move reached `execute`, which is a caller bug.
    #[error("the null move cannot be executed")]
    NullMoveExecution,

    #[error("piece on {square} does not belong to the side to move ({side_to_move})")]
    NotSideToMove {
        square: Square,
        side_to_move: Alliance,
    },

    #[error("invalid square index {0} (must be 0-63)")]
    InvalidSquare(Square),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid move string: {0}")]
    InvalidMoveString(String),

    /// The move text parsed but no legal move matches it.
    #[error("no legal move matches {0}")]
    NoMatchingMove(String),

    #[error("opening book line {line}: {reason}")]
    InvalidOpeningBook { line: usize, reason: String },

    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
