//! Castle move generation.
//!
//! Castles depend on what the opponent attacks, so they are generated after
//! both sides' ordinary candidates are known.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::castle_squares;
use crate::game_state::chess_types::CastleSide;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::Move;

/// Whether `king` still holds the right to castle towards `side`, ignoring
/// checks and blockers: king unmoved on its start square with the flag set,
/// and an unmoved rook of its colour in the matching corner.
pub fn has_castle_right(board: &Board, king: &Piece, side: CastleSide) -> bool {
    let rights = king.king_rights();
    let flag = match side {
        CastleSide::KingSide => rights.king_side_castle_capable,
        CastleSide::QueenSide => rights.queen_side_castle_capable,
    };
    let squares = castle_squares(king.alliance(), side);
    flag && king.is_first_move()
        && king.square() == squares.king_start
        && board
            .tile_at(squares.rook_start)
            .is_some_and(|rook| rook.is_rook() && rook.alliance() == king.alliance() && rook.is_first_move())
}

/// Append the castles `king` may play. The king must not be in check, the
/// squares between king and rook must be empty, and the squares the king
/// crosses and lands on must not be attacked.
pub fn generate_castle_moves(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[Move],
    out: &mut Vec<Move>,
) {
    if in_check {
        return;
    }
    let opponent = king.alliance().opposite();
    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !has_castle_right(board, king, side) {
            continue;
        }
        let squares = castle_squares(king.alliance(), side);
        if squares.between.iter().any(|sq| board.is_occupied(*sq)) {
            continue;
        }
        if squares
            .king_path
            .iter()
            .any(|sq| is_square_attacked(board, *sq, opponent, opponent_moves))
        {
            continue;
        }
        let Some(rook) = board.tile_at(squares.rook_start) else {
            continue;
        };
        out.push(Move::Castle {
            piece: *king,
            destination: squares.king_destination,
            side,
            rook: *rook,
            rook_destination: squares.rook_destination,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::Alliance;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_fen;

    fn castles(fen: &str) -> Vec<Move> {
        let position = parse_fen(fen).expect("FEN should parse");
        position
            .current_player()
            .legal_moves()
            .iter()
            .filter(|m| m.is_castle())
            .copied()
            .collect()
    }

    #[test]
    fn both_castles_available_on_open_back_rank() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"e1g1".to_string()));
        assert!(names.contains(&"e1c1".to_string()));
    }

    #[test]
    fn missing_rights_forbid_castling() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1").is_empty());
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b q - 0 1").len(), 1);
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        // Black rook on f8 covers f1.
        let moves = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_string(), "e1c1");
    }

    #[test]
    fn pawn_covering_transit_square_forbids_castling() {
        // Black pawn on e2 covers d1 and f1 without giving check.
        let moves = castles("4k3/8/8/8/8/8/4p3/R3K2R w KQ - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn king_in_check_cannot_castle() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn castle_moves_king_and_rook() {
        let position = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = position.find_move(60, 62).expect("king-side castle");
        let next = position.current_player().make_move(&castle).into_position();
        assert!(next.tile_at(62).is_some_and(|p| p.is_king()));
        assert!(next.tile_at(61).is_some_and(|p| p.is_rook()));
        assert!(next.tile_at(63).is_none());
        assert!(next.player(Alliance::White).is_castled());
        assert!(!next.player(Alliance::White).is_queen_side_castle_capable());
    }
}
