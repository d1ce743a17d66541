//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the board's
//! square indices, where `a8 == 0` and `h1 == 63`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{column_of, is_valid_square, row_of, SQUARES_PER_ROW};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let column = file - b'a';
    let row = b'8' - rank;
    Ok(row * SQUARES_PER_ROW as u8 + column)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !is_valid_square(square) {
        return Err(ChessError::InvalidSquare(square));
    }

    let file_char = char::from(b'a' + column_of(square));
    let rank_char = char::from(b'8' - row_of(square));

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::ChessError;

    #[test]
    fn corners_and_centre_map_to_expected_indices() {
        assert_eq!(algebraic_to_square("a8").unwrap(), 0);
        assert_eq!(algebraic_to_square("h8").unwrap(), 7);
        assert_eq!(algebraic_to_square("a1").unwrap(), 56);
        assert_eq!(algebraic_to_square("h1").unwrap(), 63);
        assert_eq!(algebraic_to_square("e4").unwrap(), 36);
    }

    #[test]
    fn every_square_converts_back() {
        for square in 0..64u8 {
            let name = square_to_algebraic(square).unwrap();
            assert_eq!(algebraic_to_square(&name).unwrap(), square);
        }
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert_eq!(square_to_algebraic(64).unwrap_err(), ChessError::InvalidSquare(64));
    }
}
