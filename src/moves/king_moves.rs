use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_stepping_moves;
use crate::moves::chess_move::Move;

pub const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Single steps only. Castles need the opponent's moves and are added when
/// the position is assembled.
pub fn generate_king_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    push_stepping_moves(piece, board, &KING_OFFSETS, out);
}
