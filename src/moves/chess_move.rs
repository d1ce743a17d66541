//! Move values and position transitions.
//!
//! A `Move` is a closed set of ply kinds, each carrying the pieces it needs
//! to rebuild the board. Executing a move never touches the source position;
//! it assembles a fresh one from the surviving pieces.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Quiet move of a non-pawn piece.
    Major { piece: Piece, destination: Square },
    /// Capture by a non-pawn piece.
    MajorAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Single forward pawn step.
    Pawn { piece: Piece, destination: Square },
    /// Double forward pawn step; the pawn becomes capturable en passant.
    PawnJump { piece: Piece, destination: Square },
    PawnAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Capture of the en-passant pawn, which stands behind `destination`.
    PawnEnPassantAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Pawn step or capture onto the last row.
    PawnPromotion {
        piece: Piece,
        destination: Square,
        attacked: Option<Piece>,
        promoted_to: PieceKind,
    },
    Castle {
        piece: Piece,
        destination: Square,
        side: CastleSide,
        rook: Piece,
        rook_destination: Square,
    },
    /// Sentinel for "no move". Produces the initial position and is never
    /// executable.
    Null,
}

/// Identity of a ply for legality checks: same origin, destination and
/// moving piece means the same ply, whatever the move variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveKey {
    pub origin: Square,
    pub destination: Square,
    pub piece: Piece,
}

impl Move {
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Move::Major { piece, .. }
            | Move::MajorAttack { piece, .. }
            | Move::Pawn { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. }
            | Move::PawnPromotion { piece, .. }
            | Move::Castle { piece, .. } => Some(piece),
            Move::Null => None,
        }
    }

    #[inline]
    pub fn origin(&self) -> Option<Square> {
        self.piece().map(Piece::square)
    }

    #[inline]
    pub fn destination(&self) -> Option<Square> {
        match self {
            Move::Major { destination, .. }
            | Move::MajorAttack { destination, .. }
            | Move::Pawn { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnAttack { destination, .. }
            | Move::PawnEnPassantAttack { destination, .. }
            | Move::PawnPromotion { destination, .. }
            | Move::Castle { destination, .. } => Some(*destination),
            Move::Null => None,
        }
    }

    pub fn key(&self) -> Option<MoveKey> {
        let piece = *self.piece()?;
        Some(MoveKey {
            origin: piece.square(),
            destination: self.destination()?,
            piece,
        })
    }

    /// Piece removed by this move, if any.
    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Move::MajorAttack { attacked, .. }
            | Move::PawnAttack { attacked, .. }
            | Move::PawnEnPassantAttack { attacked, .. } => Some(attacked),
            Move::PawnPromotion { attacked, .. } => attacked.as_ref(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion { .. })
    }

    pub fn promoted_to(&self) -> Option<PieceKind> {
        match self {
            Move::PawnPromotion { promoted_to, .. } => Some(*promoted_to),
            _ => None,
        }
    }

    /// Same promotion with a different target piece. Other moves are
    /// returned unchanged.
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        match self {
            Move::PawnPromotion {
                piece,
                destination,
                attacked,
                ..
            } => Move::PawnPromotion {
                piece,
                destination,
                attacked,
                promoted_to: kind,
            },
            other => other,
        }
    }

    /// Build the position that follows this move.
    ///
    /// Every piece of the mover except the moved one (and the castle rook) is
    /// copied, every opponent piece except the captured one is copied, and
    /// the moved piece is placed fresh on its destination. Only a pawn jump
    /// leaves an en-passant pawn behind.
    pub fn execute(&self, position: &Position) -> ChessResult<Position> {
        let Some(piece) = self.piece().copied() else {
            return Err(ChessError::NullMoveExecution);
        };
        let mover = position.side_to_move();
        if piece.alliance() != mover {
            return Err(ChessError::NotSideToMove {
                square: piece.square(),
                side_to_move: mover,
            });
        }
        let destination = self.destination().ok_or(ChessError::NullMoveExecution)?;

        let captured_square = self.attacked_piece().map(Piece::square);
        let rook_square = match self {
            Move::Castle { rook, .. } => Some(rook.square()),
            _ => None,
        };
        let vacated = |square: Square| {
            square == piece.square() || Some(square) == captured_square || Some(square) == rook_square
        };

        let mut pieces: Vec<Piece> = position
            .board()
            .pieces()
            .filter(|p| !vacated(p.square()))
            .copied()
            .collect();

        let placed = match self {
            Move::PawnPromotion { promoted_to, .. } => {
                Piece::with_first_move(*promoted_to, destination, mover, false)
            }
            Move::Castle {
                rook_destination, ..
            } => {
                pieces.push(Piece::with_first_move(PieceKind::Rook, *rook_destination, mover, false));
                piece.moved_to(destination, true)
            }
            _ => piece.moved_to(destination, false),
        };
        pieces.push(placed);

        let en_passant_pawn = match self {
            Move::PawnJump { .. } => Some(placed),
            _ => None,
        };

        let halfmove_clock = if piece.kind() == PieceKind::Pawn || self.is_attack() {
            0
        } else {
            position.halfmove_clock().saturating_add(1)
        };
        let fullmove_number = if mover.is_black() {
            position.fullmove_number().saturating_add(1)
        } else {
            position.fullmove_number()
        };

        Position::build(
            Board::from_pieces(pieces, en_passant_pawn),
            mover.opposite(),
            *self,
            halfmove_clock,
            fullmove_number,
        )
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`, `e1g1`; the null move prints `0000`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(origin), Some(destination)) = (self.origin(), self.destination()) else {
            return write!(f, "0000");
        };
        let from = square_to_algebraic(origin).map_err(|_| fmt::Error)?;
        let to = square_to_algebraic(destination).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(kind) = self.promoted_to() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}
