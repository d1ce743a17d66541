//! Canonical chess-rule constants and board geometry.
//!
//! Row and column membership tables drive the edge-wrap exclusions used by
//! move generation: an offset that would leave the board sideways is rejected
//! before it is applied.

use crate::game_state::chess_types::{Alliance, CastleSide, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const NUM_SQUARES: usize = 64;
pub const SQUARES_PER_ROW: usize = 8;

pub const FIRST_COLUMN: [bool; NUM_SQUARES] = column_table(0);
pub const SECOND_COLUMN: [bool; NUM_SQUARES] = column_table(1);
pub const SEVENTH_COLUMN: [bool; NUM_SQUARES] = column_table(6);
pub const EIGHTH_COLUMN: [bool; NUM_SQUARES] = column_table(7);

/// Row tables are named after chess ranks: `EIGHTH_ROW` is the top row
/// (`a8..h8`), `FIRST_ROW` the bottom one.
pub const EIGHTH_ROW: [bool; NUM_SQUARES] = row_table(0);
pub const SEVENTH_ROW: [bool; NUM_SQUARES] = row_table(1);
pub const SECOND_ROW: [bool; NUM_SQUARES] = row_table(6);
pub const FIRST_ROW: [bool; NUM_SQUARES] = row_table(7);

const fn column_table(column: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut sq = column;
    while sq < NUM_SQUARES {
        table[sq] = true;
        sq += SQUARES_PER_ROW;
    }
    table
}

const fn row_table(row: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut sq = row * SQUARES_PER_ROW;
    while sq < (row + 1) * SQUARES_PER_ROW {
        table[sq] = true;
        sq += 1;
    }
    table
}

/// Apply a signed offset to a square, returning `None` when the result falls
/// off the top or bottom of the board. Sideways wrap must be excluded by the
/// caller through the column tables.
#[inline]
pub fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let target = i16::from(square) + i16::from(offset);
    if (0..NUM_SQUARES as i16).contains(&target) {
        Some(target as Square)
    } else {
        None
    }
}

#[inline]
pub const fn is_valid_square(square: Square) -> bool {
    (square as usize) < NUM_SQUARES
}

#[inline]
pub const fn column_of(square: Square) -> u8 {
    square % SQUARES_PER_ROW as u8
}

#[inline]
pub const fn row_of(square: Square) -> u8 {
    square / SQUARES_PER_ROW as u8
}

/// Fixed squares involved in one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSquares {
    pub king_start: Square,
    pub king_destination: Square,
    pub rook_start: Square,
    pub rook_destination: Square,
    /// Squares that must be empty between king and rook.
    pub between: &'static [Square],
    /// Squares the king crosses or lands on; none may be attacked.
    pub king_path: [Square; 2],
}

pub const fn castle_squares(alliance: Alliance, side: CastleSide) -> CastleSquares {
    match (alliance, side) {
        (Alliance::White, CastleSide::KingSide) => CastleSquares {
            king_start: 60,
            king_destination: 62,
            rook_start: 63,
            rook_destination: 61,
            between: &[61, 62],
            king_path: [61, 62],
        },
        (Alliance::White, CastleSide::QueenSide) => CastleSquares {
            king_start: 60,
            king_destination: 58,
            rook_start: 56,
            rook_destination: 59,
            between: &[57, 58, 59],
            king_path: [59, 58],
        },
        (Alliance::Black, CastleSide::KingSide) => CastleSquares {
            king_start: 4,
            king_destination: 6,
            rook_start: 7,
            rook_destination: 5,
            between: &[5, 6],
            king_path: [5, 6],
        },
        (Alliance::Black, CastleSide::QueenSide) => CastleSquares {
            king_start: 4,
            king_destination: 2,
            rook_start: 0,
            rook_destination: 3,
            between: &[1, 2, 3],
            king_path: [3, 2],
        },
    }
}
