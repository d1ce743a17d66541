//! Coordinate move notation (`e2e4`, `e7e8q`).
//!
//! Parsing resolves text against the side to move's generated moves; it
//! never builds a move the position could not produce.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_long_algebraic(position: &Position, long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveString(long_algebraic.to_owned()));
    }

    let origin = algebraic_to_square(&text[0..2])
        .map_err(|_| ChessError::InvalidMoveString(long_algebraic.to_owned()))?;
    let destination = algebraic_to_square(&text[2..4])
        .map_err(|_| ChessError::InvalidMoveString(long_algebraic.to_owned()))?;
    let promotion = text[4..]
        .chars()
        .next()
        .map(|letter| {
            promotion_from_char(letter).ok_or_else(|| ChessError::InvalidMoveString(long_algebraic.to_owned()))
        })
        .transpose()?;

    let generated = position
        .find_move(origin, destination)
        .ok_or_else(|| ChessError::NoMatchingMove(text.to_owned()))?;

    match (generated.is_promotion(), promotion) {
        (true, Some(kind)) => Ok(generated.with_promotion(kind)),
        (true, None) => Ok(generated),
        (false, None) => Ok(generated),
        (false, Some(_)) => Err(ChessError::NoMatchingMove(text.to_owned())),
    }
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

fn promotion_from_char(letter: char) -> Option<PieceKind> {
    match letter {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
