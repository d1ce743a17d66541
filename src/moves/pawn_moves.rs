use crate::game_state::board::Board;
use crate::game_state::chess_rules::{offset_square, EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{Alliance, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::moves::chess_move::Move;

/// Diagonal squares a pawn covers, whether or not anything stands there.
/// Offsets 7 and 9 are scaled by the pawn's direction; each one is dropped
/// when it would wrap around a side edge.
pub fn pawn_attack_squares(square: Square, alliance: Alliance) -> impl Iterator<Item = Square> {
    let sq = square as usize;
    let white = alliance.is_white();
    let seven_blocked = (EIGHTH_COLUMN[sq] && white) || (FIRST_COLUMN[sq] && !white);
    let nine_blocked = (FIRST_COLUMN[sq] && white) || (EIGHTH_COLUMN[sq] && !white);
    let direction = alliance.direction();

    [(7i8, seven_blocked), (9i8, nine_blocked)]
        .into_iter()
        .filter(|(_, blocked)| !blocked)
        .filter_map(move |(offset, _)| offset_square(square, offset * direction))
}

pub fn generate_pawn_moves(piece: &Piece, board: &Board, out: &mut Vec<Move>) {
    let alliance = piece.alliance();
    let square = piece.square();
    let forward = alliance.forward_offset();

    if let Some(destination) = offset_square(square, forward) {
        if !board.is_occupied(destination) {
            if alliance.is_promotion_square(destination) {
                out.push(Move::PawnPromotion {
                    piece: *piece,
                    destination,
                    attacked: None,
                    promoted_to: PieceKind::Queen,
                });
            } else {
                out.push(Move::Pawn {
                    piece: *piece,
                    destination,
                });
            }

            if piece.is_first_move() && alliance.is_pawn_start_square(square) {
                if let Some(jump) = offset_square(square, 2 * forward) {
                    if !board.is_occupied(jump) {
                        out.push(Move::PawnJump {
                            piece: *piece,
                            destination: jump,
                        });
                    }
                }
            }
        }
    }

    for destination in pawn_attack_squares(square, alliance) {
        match board.tile_at(destination) {
            Some(target) if target.alliance() != alliance => {
                if alliance.is_promotion_square(destination) {
                    out.push(Move::PawnPromotion {
                        piece: *piece,
                        destination,
                        attacked: Some(*target),
                        promoted_to: PieceKind::Queen,
                    });
                } else {
                    out.push(Move::PawnAttack {
                        piece: *piece,
                        destination,
                        attacked: *target,
                    });
                }
            }
            Some(_) => {}
            None => {
                let Some(en_passant) = board.en_passant_pawn() else {
                    continue;
                };
                // The jumped pawn stands directly behind the capture square.
                if en_passant.alliance() != alliance
                    && offset_square(destination, -forward) == Some(en_passant.square())
                {
                    out.push(Move::PawnEnPassantAttack {
                        piece: *piece,
                        destination,
                        attacked: *en_passant,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_pawn_moves, pawn_attack_squares};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Alliance, PieceKind};
    use crate::game_state::piece::Piece;
    use crate::moves::chess_move::Move;

    fn moves_for(pawn: Piece, others: &[Piece], en_passant: Option<Piece>) -> Vec<Move> {
        let board = Board::from_pieces(others.iter().copied().chain([pawn]), en_passant);
        let mut out = Vec::new();
        generate_pawn_moves(&pawn, &board, &mut out);
        out
    }

    #[test]
    fn attack_squares_do_not_wrap() {
        let a2: Vec<u8> = pawn_attack_squares(48, Alliance::White).collect();
        assert_eq!(a2, vec![41]);
        let h7: Vec<u8> = pawn_attack_squares(15, Alliance::Black).collect();
        assert_eq!(h7, vec![22]);
    }

    #[test]
    fn unmoved_pawn_steps_and_jumps() {
        let pawn = Piece::new(PieceKind::Pawn, 52, Alliance::White);
        let moves = moves_for(pawn, &[], None);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| matches!(m, Move::PawnJump { destination: 36, .. })));
    }

    #[test]
    fn blocked_pawn_cannot_jump_over() {
        let pawn = Piece::new(PieceKind::Pawn, 52, Alliance::White);
        let blocker = Piece::new(PieceKind::Knight, 44, Alliance::Black);
        assert!(moves_for(pawn, &[blocker], None).is_empty());
    }

    #[test]
    fn promotion_emits_queen_only() {
        let pawn = Piece::with_first_move(PieceKind::Pawn, 9, Alliance::White, false);
        let rook = Piece::new(PieceKind::Rook, 0, Alliance::Black);
        let moves = moves_for(pawn, &[rook], None);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.promoted_to() == Some(PieceKind::Queen)));
        assert!(moves.iter().any(|m| m.is_attack()));
    }

    #[test]
    fn en_passant_requires_adjacent_jumped_pawn() {
        let pawn = Piece::with_first_move(PieceKind::Pawn, 28, Alliance::White, false);
        let jumped = Piece::with_first_move(PieceKind::Pawn, 27, Alliance::Black, false);
        let moves = moves_for(pawn, &[jumped], Some(jumped));
        assert!(moves
            .iter()
            .any(|m| matches!(m, Move::PawnEnPassantAttack { destination: 19, .. })));

        let far = Piece::with_first_move(PieceKind::Pawn, 25, Alliance::Black, false);
        let moves = moves_for(pawn, &[far], Some(far));
        assert!(!moves.iter().any(|m| matches!(m, Move::PawnEnPassantAttack { .. })));
    }
}
