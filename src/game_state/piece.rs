//! Immutable piece values.
//!
//! A piece is superseded, never updated: every move builds a fresh value at
//! the destination square. Move generation is dispatched on the kind.

use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Alliance, PieceKind, Square};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Castle bookkeeping carried by kings. Always default for other kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KingRights {
    pub king_side_castle_capable: bool,
    pub queen_side_castle_capable: bool,
    pub castled: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Piece {
    kind: PieceKind,
    square: Square,
    alliance: Alliance,
    first_move: bool,
    king_rights: KingRights,
}

impl Piece {
    /// A piece that has not moved yet.
    pub fn new(kind: PieceKind, square: Square, alliance: Alliance) -> Self {
        Self::with_first_move(kind, square, alliance, true)
    }

    pub fn with_first_move(kind: PieceKind, square: Square, alliance: Alliance, first_move: bool) -> Self {
        Self {
            kind,
            square,
            alliance,
            first_move,
            king_rights: KingRights::default(),
        }
    }

    pub fn king(square: Square, alliance: Alliance, first_move: bool, rights: KingRights) -> Self {
        Self {
            kind: PieceKind::King,
            square,
            alliance,
            first_move,
            king_rights: rights,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    pub fn is_rook(&self) -> bool {
        self.kind == PieceKind::Rook
    }

    #[inline]
    pub fn king_rights(&self) -> KingRights {
        self.king_rights
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    #[inline]
    pub fn location_bonus(&self) -> i32 {
        self.alliance.location_bonus(self.kind, self.square)
    }

    /// The piece as it stands after moving to `destination`. Kings lose both
    /// castle rights; `castled` records whether the move was a castle.
    pub fn moved_to(&self, destination: Square, castled: bool) -> Self {
        let king_rights = if self.is_king() {
            KingRights {
                king_side_castle_capable: false,
                queen_side_castle_capable: false,
                castled: self.king_rights.castled || castled,
            }
        } else {
            KingRights::default()
        };
        Self {
            kind: self.kind,
            square: destination,
            alliance: self.alliance,
            first_move: false,
            king_rights,
        }
    }

    /// Candidate moves of this piece, before the self-check filter.
    pub fn candidate_moves(&self, board: &Board) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        match self.kind {
            PieceKind::Pawn => generate_pawn_moves(self, board, &mut out),
            PieceKind::Knight => generate_knight_moves(self, board, &mut out),
            PieceKind::Bishop => generate_bishop_moves(self, board, &mut out),
            PieceKind::Rook => generate_rook_moves(self, board, &mut out),
            PieceKind::Queen => generate_queen_moves(self, board, &mut out),
            PieceKind::King => generate_king_moves(self, board, &mut out),
        }
        out
    }

    /// FEN letter: upper case for White.
    pub fn fen_char(&self) -> char {
        let letter = self.kind.letter();
        match self.alliance {
            Alliance::White => letter.to_ascii_uppercase(),
            Alliance::Black => letter,
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.square == other.square
            && self.alliance == other.alliance
            && self.first_move == other.first_move
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.square.hash(state);
        self.alliance.hash(state);
        self.first_move.hash(state);
    }
}
