use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_sliding_moves;
use crate::moves::chess_move::Move;

pub const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];

pub fn generate_bishop_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    push_sliding_moves(piece, board, &BISHOP_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Alliance, PieceKind};
    use crate::game_state::piece::Piece;

    #[test]
    fn bishop_on_a1_sees_the_long_diagonal_only() {
        let bishop = Piece::new(PieceKind::Bishop, 56, Alliance::White);
        let board = Board::from_pieces([bishop], None);
        let mut out = Vec::new();
        generate_bishop_moves(&bishop, &board, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|m| m.destination().is_some_and(|d| d % 7 == 0)));
    }

    #[test]
    fn bishop_stops_at_first_capture() {
        let bishop = Piece::new(PieceKind::Bishop, 27, Alliance::White);
        let blocker = Piece::new(PieceKind::Pawn, 18, Alliance::Black);
        let board = Board::from_pieces([bishop, blocker], None);
        let mut out = Vec::new();
        generate_bishop_moves(&bishop, &board, &mut out);
        assert!(out.iter().any(|m| m.destination() == Some(18) && m.is_attack()));
        assert!(!out.iter().any(|m| m.destination() == Some(9)));
    }
}
