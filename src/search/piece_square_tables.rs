//! Positional bonus tables.
//!
//! Tables are laid out as seen by White, row-major with `a8` first, which is
//! also the square indexing of the board. Black reads them mirrored top to
//! bottom.

use crate::game_state::chess_types::{Alliance, PieceKind, Square};

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    75, 75, 75, 75, 75, 75, 75, 75,
    25, 25, 29, 29, 29, 29, 25, 25,
     4,  8, 12, 21, 21, 12,  8,  4,
     0,  4,  8, 17, 17,  8,  4,  0,
     4, -4, -8,  4,  4, -8, -4,  4,
     4,  8,  8,-17,-17,  8,  8,  4,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 20, 20, 20, 20, 20, 20,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

#[inline]
const fn mirror(square: Square) -> usize {
    ((7 - square / 8) * 8 + square % 8) as usize
}

pub fn bonus(kind: PieceKind, alliance: Alliance, square: Square) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    let index = match alliance {
        Alliance::White => square as usize,
        Alliance::Black => mirror(square),
    };
    table[index]
}

#[cfg(test)]
mod tests {
    use super::bonus;
    use crate::game_state::chess_types::{Alliance, PieceKind};

    #[test]
    fn black_reads_tables_mirrored() {
        // e2 for White mirrors e7 for Black.
        assert_eq!(
            bonus(PieceKind::Pawn, Alliance::White, 52),
            bonus(PieceKind::Pawn, Alliance::Black, 12)
        );
        // g1 / g8 king shelter.
        assert_eq!(bonus(PieceKind::King, Alliance::White, 62), 30);
        assert_eq!(bonus(PieceKind::King, Alliance::Black, 6), 30);
    }

    #[test]
    fn centre_knight_beats_rim_knight() {
        assert!(bonus(PieceKind::Knight, Alliance::White, 36) > bonus(PieceKind::Knight, Alliance::White, 32));
    }
}
