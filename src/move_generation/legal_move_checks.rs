//! Attack queries over candidate move lists.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Alliance, PieceKind, Square};
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::pawn_attack_squares;

/// Moves in `moves` that land on `square`.
pub fn attacks_on_square(square: Square, moves: &[Move]) -> impl Iterator<Item = &Move> {
    moves.iter().filter(move |mv| mv.destination() == Some(square))
}

/// Whether `attacker` could move onto `square`. Pawn diagonals count even
/// when the square is empty, since a pawn only captures there.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Alliance, attacker_moves: &[Move]) -> bool {
    attacks_on_square(square, attacker_moves).next().is_some()
        || board
            .active_pieces(attacker)
            .filter(|piece| piece.kind() == PieceKind::Pawn)
            .any(|pawn| pawn_attack_squares(pawn.square(), attacker).any(|covered| covered == square))
}

#[cfg(test)]
mod tests {
    use super::is_square_attacked;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Alliance, PieceKind};
    use crate::game_state::piece::Piece;

    #[test]
    fn empty_pawn_diagonal_counts_as_attacked() {
        let pawn = Piece::new(PieceKind::Pawn, 13, Alliance::Black);
        let board = Board::from_pieces([pawn], None);
        // f7 pawn covers e6 and g6 without any candidate move there.
        assert!(is_square_attacked(&board, 20, Alliance::Black, &[]));
        assert!(is_square_attacked(&board, 22, Alliance::Black, &[]));
        assert!(!is_square_attacked(&board, 21, Alliance::Black, &[]));
    }
}
