//! Primitive chess types shared by every subsystem.
//!
//! Squares are indexed row-major from White's point of view: `0 == a8`,
//! `7 == h8`, `56 == a1`, `63 == h1`.

use std::fmt;

use crate::game_state::chess_rules::{FIRST_ROW, SECOND_ROW, SEVENTH_ROW, EIGHTH_ROW};
use crate::search::piece_square_tables;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Side owning a piece or having the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Alliance::White)
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Alliance::Black)
    }

    /// Row step for a pawn of this side: White moves up the board (-1),
    /// Black moves down (+1).
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// Square offset of a single forward pawn step.
    #[inline]
    pub const fn forward_offset(self) -> i8 {
        self.direction() * 8
    }

    #[inline]
    pub const fn is_pawn_start_square(self, square: Square) -> bool {
        match self {
            Alliance::White => SECOND_ROW[square as usize],
            Alliance::Black => SEVENTH_ROW[square as usize],
        }
    }

    #[inline]
    pub const fn is_promotion_square(self, square: Square) -> bool {
        match self {
            Alliance::White => EIGHTH_ROW[square as usize],
            Alliance::Black => FIRST_ROW[square as usize],
        }
    }

    /// Positional bonus for a piece of this side standing on `square`.
    #[inline]
    pub fn location_bonus(self, kind: PieceKind, square: Square) -> i32 {
        piece_square_tables::bonus(kind, self, square)
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Lower-case FEN letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Wing a king castles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}
