//! Square-level piece arrangement.
//!
//! `Board` is the part of a position that move generation reads: the 64
//! tiles and the pawn currently vulnerable to en passant. It is built once
//! and never edited afterwards.

use crate::game_state::chess_rules::NUM_SQUARES;
use crate::game_state::chess_types::{Alliance, Square};
use crate::game_state::piece::Piece;

#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Option<Piece>; NUM_SQUARES],
    en_passant_pawn: Option<Piece>,
}

impl Board {
    /// Place every piece on its own square. A later piece on the same square
    /// replaces an earlier one; pieces off the board are skipped.
    /// `Position` construction rejects them before getting here.
    pub fn from_pieces<I>(pieces: I, en_passant_pawn: Option<Piece>) -> Self
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut tiles = [None; NUM_SQUARES];
        for piece in pieces {
            if let Some(tile) = tiles.get_mut(piece.square() as usize) {
                *tile = Some(piece);
            }
        }
        Self {
            tiles,
            en_passant_pawn,
        }
    }

    /// Piece on `square`, `None` for an empty tile or an off-board index.
    #[inline]
    pub fn tile_at(&self, square: Square) -> Option<&Piece> {
        self.tiles.get(square as usize).and_then(Option::as_ref)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile_at(square).is_some()
    }

    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.tiles.iter().flatten()
    }

    pub fn active_pieces(&self, alliance: Alliance) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.alliance() == alliance)
    }
}
