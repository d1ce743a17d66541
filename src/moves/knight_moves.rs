use crate::game_state::board::Board;
use crate::game_state::chess_rules::{offset_square, EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN};
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_major_target;
use crate::moves::chess_move::Move;

pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Knight jumps that would wrap around a side edge from `square`.
#[inline]
fn is_knight_exclusion(square: Square, offset: i8) -> bool {
    let sq = square as usize;
    (FIRST_COLUMN[sq] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[sq] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[sq] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[sq] && matches!(offset, -15 | -6 | 10 | 17))
}

pub fn generate_knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    let square = piece.square();
    for offset in KNIGHT_OFFSETS {
        if is_knight_exclusion(square, offset) {
            continue;
        }
        if let Some(destination) = offset_square(square, offset) {
            push_major_target(piece, board, destination, out);
        }
    }
}
