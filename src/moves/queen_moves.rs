use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::generate_rook_moves;

/// Queen moves are the union of bishop and rook rays.
pub fn generate_queen_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    generate_bishop_moves(piece, board, out);
    generate_rook_moves(piece, board, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Alliance, PieceKind};
    use crate::game_state::piece::Piece;

    #[test]
    fn central_queen_has_twenty_seven_moves() {
        let queen = Piece::new(PieceKind::Queen, 27, Alliance::White);
        let board = Board::from_pieces([queen], None);
        let mut out = Vec::new();
        generate_queen_moves(&queen, &board, &mut out);
        assert_eq!(out.len(), 27);
    }
}
