//! Perft: exhaustive legal-move tree counts for validating move generation.

use crate::game_state::position::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    /// Counts for the leaf reached by `mv`, with `after` the resulting position.
    fn leaf(mv: &Move, after: &Position) -> Self {
        let opponent = after.current_player();
        Self {
            nodes: 1,
            captures: usize::from(mv.is_attack()),
            en_passant: usize::from(matches!(mv, Move::PawnEnPassantAttack { .. })),
            castles: usize::from(mv.is_castle()),
            promotions: usize::from(mv.is_promotion()),
            checks: usize::from(opponent.is_in_check()),
            checkmates: usize::from(opponent.is_in_checkmate()),
        }
    }
}

/// Count the leaves `depth` plies below `position`, playing every move that
/// `make_move` accepts.
pub fn perft(position: &Position, depth: u32) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    perft_recurse(position, depth, &mut total);
    total
}

/// Leaf counts per root move, in generation order.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(Move, usize)> {
    let player = position.current_player();
    player
        .legal_moves()
        .iter()
        .filter_map(|mv| {
            let transition = player.make_move(mv);
            transition.status().is_done().then(|| {
                let nodes = perft(transition.position(), depth.saturating_sub(1)).nodes;
                (*transition.attempted_move(), nodes)
            })
        })
        .collect()
}

fn perft_recurse(position: &Position, depth: u32, counts: &mut PerftCounts) {
    let player = position.current_player();
    for mv in player.legal_moves() {
        let transition = player.make_move(mv);
        if !transition.status().is_done() {
            continue;
        }
        if depth == 1 {
            counts.merge(PerftCounts::leaf(transition.attempted_move(), transition.position()));
        } else {
            perft_recurse(transition.position(), depth - 1, counts);
        }
    }
}
