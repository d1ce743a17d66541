use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::Move;

pub const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];

pub fn generate_rook_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    push_sliding_moves(piece, board, &ROOK_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Alliance, PieceKind};
    use crate::game_state::piece::Piece;

    #[test]
    fn lone_rook_has_fourteen_moves() {
        let rook = Piece::new(PieceKind::Rook, 39, Alliance::Black);
        let board = Board::from_pieces([rook], None);
        let mut out = Vec::new();
        generate_rook_moves(&rook, &board, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn friendly_piece_blocks_without_capture() {
        let rook = Piece::new(PieceKind::Rook, 63, Alliance::White);
        let pawn = Piece::new(PieceKind::Pawn, 55, Alliance::White);
        let board = Board::from_pieces([rook, pawn], None);
        let mut out = Vec::new();
        generate_rook_moves(&rook, &board, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|m| !m.is_attack()));
    }
}
