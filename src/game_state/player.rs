//! Per-side view of a position and move execution with legality checks.

use std::borrow::Cow;

use tracing::warn;

use crate::game_state::chess_types::{Alliance, CastleSide, PieceKind};
use crate::game_state::piece::Piece;
use crate::game_state::position::{PlayerState, Position};
use crate::move_generation::castling::has_castle_right;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    /// Not among the player's generated moves.
    IllegalMove,
    /// Generated, but the mover's king would be capturable afterwards.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// Outcome of [`Player::make_move`]. A rejected attempt borrows the
/// unchanged source position.
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    position: Cow<'a, Position>,
    attempted: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    fn done(position: Position, attempted: Move) -> Self {
        Self {
            position: Cow::Owned(position),
            attempted,
            status: MoveStatus::Done,
        }
    }

    fn rejected(position: &'a Position, attempted: Move, status: MoveStatus) -> Self {
        Self {
            position: Cow::Borrowed(position),
            attempted,
            status,
        }
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// The move that was executed, or the rejected request.
    #[inline]
    pub fn attempted_move(&self) -> &Move {
        &self.attempted
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn into_position(self) -> Position {
        self.position.into_owned()
    }
}

/// One side of a position. Cheap to copy; all data lives in the position.
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    position: &'a Position,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(position: &'a Position, state: &'a PlayerState) -> Self {
        Self { position, state }
    }

    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.state.alliance
    }

    #[inline]
    pub fn king(&self) -> &'a Piece {
        &self.state.king
    }

    #[inline]
    pub fn position(&self) -> &'a Position {
        self.position
    }

    /// Generated moves including castles. Moves that leave the king in check
    /// are still listed; `make_move` rejects them.
    #[inline]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state.legal_moves
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = &'a Piece> {
        self.position.active_pieces(self.state.alliance)
    }

    pub fn opponent(&self) -> Player<'a> {
        self.position.player(self.alliance().opposite())
    }

    #[inline]
    pub fn is_to_move(&self) -> bool {
        self.position.side_to_move() == self.alliance()
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    /// At least one move that does not leave the king in check. Only the side
    /// to move can have one.
    pub fn has_escape_moves(&self) -> bool {
        *self.state.escape.get_or_init(|| {
            self.is_to_move()
                && self
                    .legal_moves()
                    .iter()
                    .any(|mv| self.make_move(mv).status().is_done())
        })
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_to_move() && self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        self.is_to_move() && !self.is_in_check() && !self.has_escape_moves()
    }

    #[inline]
    pub fn is_castled(&self) -> bool {
        self.king().king_rights().castled
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        has_castle_right(self.position.board(), self.king(), CastleSide::KingSide)
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        has_castle_right(self.position.board(), self.king(), CastleSide::QueenSide)
    }

    /// Membership by origin, destination and moving piece.
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.resolve(mv).is_some()
    }

    /// The generated move matching `mv`. A requested promotion piece other
    /// than the generated queen is kept.
    fn resolve(&self, mv: &Move) -> Option<Move> {
        let key = mv.key()?;
        let generated = self.legal_moves().iter().find(|candidate| candidate.key() == Some(key))?;
        match (generated.is_promotion(), mv.promoted_to()) {
            (true, Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen))) => {
                Some(generated.with_promotion(kind))
            }
            _ => Some(*generated),
        }
    }

    /// Play `mv` for this player. The source position is never modified.
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_to_move() {
            return MoveTransition::rejected(self.position, *mv, MoveStatus::IllegalMove);
        }
        let Some(resolved) = self.resolve(mv) else {
            return MoveTransition::rejected(self.position, *mv, MoveStatus::IllegalMove);
        };
        let next = match resolved.execute(self.position) {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, mv = %resolved, "generated move failed to execute");
                return MoveTransition::rejected(self.position, *mv, MoveStatus::IllegalMove);
            }
        };
        if next.player(self.alliance()).is_in_check() {
            return MoveTransition::rejected(self.position, *mv, MoveStatus::LeavesPlayerInCheck);
        }
        MoveTransition::done(next, resolved)
    }
}
