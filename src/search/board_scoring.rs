//! Static position scores for the minimax leaves.
//!
//! Each side earns material, mobility, attack, check, mate and castle terms;
//! the score is White's total minus Black's.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::player::Player;
use crate::game_state::position::Position;

pub const CHECK_BONUS: i32 = 45;
pub const CHECKMATE_BONUS: i32 = 10_000;
pub const DEPTH_BONUS: i32 = 100;
pub const CASTLE_BONUS: i32 = 25;
pub const MOBILITY_MULTIPLIER: i32 = 5;
pub const ATTACK_MULTIPLIER: i32 = 1;
pub const TWO_BISHOPS_BONUS: i32 = 25;

pub trait BoardEvaluator: Send + Sync {
    /// Score from White's perspective: positive favours White. `depth` is the
    /// remaining search depth, so mates found higher in the tree score more.
    fn evaluate(&self, position: &Position, depth: u32) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBoardEvaluator;

impl StandardBoardEvaluator {
    pub fn score_player(player: &Player<'_>, depth: u32) -> i32 {
        material(player)
            + mobility(player)
            + attacks(player)
            + check(player)
            + checkmate(player, depth)
            + castled(player)
    }
}

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, position: &Position, depth: u32) -> i32 {
        Self::score_player(&position.white_player(), depth) - Self::score_player(&position.black_player(), depth)
    }
}

fn material(player: &Player<'_>) -> i32 {
    let mut score = 0;
    let mut bishops = 0;
    for piece in player.active_pieces() {
        score += piece.value() + piece.location_bonus();
        if piece.kind() == PieceKind::Bishop {
            bishops += 1;
        }
    }
    if bishops == 2 {
        score += TWO_BISHOPS_BONUS;
    }
    score
}

/// `5 * floor(10 * own / opponent)`; zero when either side has no moves.
fn mobility(player: &Player<'_>) -> i32 {
    let own = player.legal_moves().len();
    let theirs = player.opponent().legal_moves().len();
    if own == 0 || theirs == 0 {
        return 0;
    }
    MOBILITY_MULTIPLIER * (own * 10 / theirs) as i32
}

/// Captures whose mover is worth no more than its target.
fn attacks(player: &Player<'_>) -> i32 {
    let count = player
        .legal_moves()
        .iter()
        .filter(|mv| match (mv.piece(), mv.attacked_piece()) {
            (Some(moved), Some(attacked)) => moved.value() <= attacked.value(),
            _ => false,
        })
        .count();
    ATTACK_MULTIPLIER * count as i32
}

fn check(player: &Player<'_>) -> i32 {
    if player.opponent().is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn checkmate(player: &Player<'_>, depth: u32) -> i32 {
    if player.opponent().is_in_checkmate() {
        CHECKMATE_BONUS.saturating_mul(depth_bonus(depth))
    } else {
        0
    }
}

#[inline]
fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        1
    } else {
        DEPTH_BONUS.saturating_mul(i32::try_from(depth).unwrap_or(i32::MAX))
    }
}

fn castled(player: &Player<'_>) -> i32 {
    if player.is_castled() {
        CASTLE_BONUS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardEvaluator, StandardBoardEvaluator, CHECKMATE_BONUS, DEPTH_BONUS};
    use crate::game_state::position::Position;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn standard_position_is_balanced() {
        let evaluator = StandardBoardEvaluator;
        assert_eq!(evaluator.evaluate(&Position::standard(), 0), 0);
        assert_eq!(evaluator.evaluate(&Position::standard(), 3), 0);
    }

    #[test]
    fn extra_queen_favours_its_owner() {
        let evaluator = StandardBoardEvaluator;
        let white_up = parse_fen("3qk3/8/8/8/8/8/8/3QK2Q w - - 0 1").expect("FEN should parse");
        assert!(evaluator.evaluate(&white_up, 0) > 500);
        let black_up = parse_fen("q2qk3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        assert!(evaluator.evaluate(&black_up, 0) < -500);
    }

    #[test]
    fn checkmate_bonus_scales_with_depth() {
        let evaluator = StandardBoardEvaluator;
        let mated = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let shallow = evaluator.evaluate(&mated, 0);
        let deep = evaluator.evaluate(&mated, 2);
        assert!(shallow >= CHECKMATE_BONUS);
        assert_eq!(deep - shallow, CHECKMATE_BONUS * (DEPTH_BONUS * 2 - 1));
    }

    #[test]
    fn stalemate_earns_no_mate_bonus() {
        let evaluator = StandardBoardEvaluator;
        let stalemate = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let score = evaluator.evaluate(&stalemate, 1);
        assert!(score > 0 && score < CHECKMATE_BONUS);
    }
}
