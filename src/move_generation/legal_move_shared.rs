//! Helpers shared by the per-piece move generators.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{offset_square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::chess_move::Move;

/// King-style offsets that wrap to the far side when applied on the a-file.
#[inline]
pub fn is_first_column_exclusion(square: Square, offset: i8) -> bool {
    FIRST_COLUMN[square as usize] && matches!(offset, -9 | -1 | 7)
}

/// King-style offsets that wrap to the far side when applied on the h-file.
#[inline]
pub fn is_eighth_column_exclusion(square: Square, offset: i8) -> bool {
    EIGHTH_COLUMN[square as usize] && matches!(offset, -7 | 1 | 9)
}

#[inline]
pub fn is_edge_exclusion(square: Square, offset: i8) -> bool {
    is_first_column_exclusion(square, offset) || is_eighth_column_exclusion(square, offset)
}

/// Emit the move of a non-pawn piece onto `destination`: quiet when empty,
/// a capture when an opponent stands there, nothing when blocked by a friend.
/// Returns whether the destination was empty, i.e. a slider may continue.
#[inline]
pub fn push_major_target(piece: &Piece, board: &Board, destination: Square, out: &mut Vec<Move>) -> bool {
    match board.tile_at(destination) {
        None => {
            out.push(Move::Major {
                piece: *piece,
                destination,
            });
            true
        }
        Some(occupant) => {
            if occupant.alliance() != piece.alliance() {
                out.push(Move::MajorAttack {
                    piece: *piece,
                    destination,
                    attacked: *occupant,
                });
            }
            false
        }
    }
}

/// Walk each offset direction until the edge, a friend, or the first capture.
pub fn push_sliding_moves(piece: &Piece, board: &Board, offsets: &[i8], out: &mut Vec<Move>) {
    for &offset in offsets {
        let mut current = piece.square();
        loop {
            if is_edge_exclusion(current, offset) {
                break;
            }
            let Some(next) = offset_square(current, offset) else {
                break;
            };
            if !push_major_target(piece, board, next, out) {
                break;
            }
            current = next;
        }
    }
}

/// Single-step version of [`push_sliding_moves`] used by the king.
pub fn push_stepping_moves(piece: &Piece, board: &Board, offsets: &[i8], out: &mut Vec<Move>) {
    let square = piece.square();
    for &offset in offsets {
        if is_edge_exclusion(square, offset) {
            continue;
        }
        if let Some(destination) = offset_square(square, offset) {
            push_major_target(piece, board, destination, out);
        }
    }
}
