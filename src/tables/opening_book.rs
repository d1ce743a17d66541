//! Weighted opening book.
//!
//! Book files are plain text made of blocks: a `pos <fen>` header followed by
//! one `<move> <times-played>` line per candidate. Positions are keyed by the
//! first four FEN fields, so move counters never prevent a match.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::Rng;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::position::Position;
use crate::utils::fen_generator::generate_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMove {
    pub move_string: String,
    pub times_played: u32,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    by_position: HashMap<String, Vec<BookMove>>,
}

/// Board, side, castling and en-passant fields of a FEN, space separated.
pub fn normalize_fen_key(fen: &str) -> String {
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

/// Draw weight of a book entry: `ceil(times_played ^ exponent)`, with the
/// exponent clamped to `[0, 1]`.
pub fn weighted_play_count(times_played: u32, exponent: f64) -> u64 {
    let exponent = exponent.clamp(0.0, 1.0);
    f64::from(times_played).powf(exponent).ceil() as u64
}

impl OpeningBook {
    /// The small book bundled with the crate.
    pub fn load_default() -> ChessResult<Self> {
        Self::parse(include_str!("data/opening_book_minimal.txt"))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChessResult<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| ChessError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&data)
    }

    pub fn parse(content: &str) -> ChessResult<Self> {
        let mut by_position: HashMap<String, Vec<BookMove>> = HashMap::new();
        let mut current_key: Option<String> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(fen) = line.strip_prefix("pos") {
                let key = normalize_fen_key(fen);
                if key.split(' ').count() != 4 {
                    return Err(ChessError::InvalidOpeningBook {
                        line: line_number,
                        reason: format!("position header needs at least four FEN fields: {line}"),
                    });
                }
                by_position.entry(key.clone()).or_default();
                current_key = Some(key);
                continue;
            }

            let key = current_key.as_ref().ok_or_else(|| ChessError::InvalidOpeningBook {
                line: line_number,
                reason: "move line before any `pos` header".to_owned(),
            })?;

            let mut fields = line.split_whitespace();
            let (Some(move_string), Some(count), None) = (fields.next(), fields.next(), fields.next()) else {
                return Err(ChessError::InvalidOpeningBook {
                    line: line_number,
                    reason: format!("expected `<move> <times-played>`, got `{line}`"),
                });
            };
            let times_played = count.parse::<u32>().map_err(|_| ChessError::InvalidOpeningBook {
                line: line_number,
                reason: format!("invalid play count `{count}`"),
            })?;

            by_position.entry(key.clone()).or_default().push(BookMove {
                move_string: move_string.to_owned(),
                times_played,
            });
        }

        Ok(Self { by_position })
    }

    /// Number of positions with at least one entry.
    pub fn len(&self) -> usize {
        self.by_position.values().filter(|moves| !moves.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn moves_for_fen(&self, fen: &str) -> Option<&[BookMove]> {
        self.by_position
            .get(&normalize_fen_key(fen))
            .map(Vec::as_slice)
            .filter(|moves| !moves.is_empty())
    }

    pub fn moves_for(&self, position: &Position) -> Option<&[BookMove]> {
        self.moves_for_fen(&generate_fen(position))
    }

    pub fn has_book_move(&self, position: &Position) -> bool {
        self.moves_for(position).is_some()
    }

    /// Draw one entry for `position`, each weighted by
    /// [`weighted_play_count`]. `None` when the position is unknown or every
    /// weight is zero.
    pub fn choose_weighted_move<R: Rng + ?Sized>(
        &self,
        position: &Position,
        weight_exponent: f64,
        rng: &mut R,
    ) -> Option<&BookMove> {
        let moves = self.moves_for(position)?;

        let total_weight: u64 = moves
            .iter()
            .map(|m| weighted_play_count(m.times_played, weight_exponent))
            .sum();
        if total_weight == 0 {
            return None;
        }

        let mut pick = rng.random_range(0..total_weight);
        for m in moves {
            let w = weighted_play_count(m.times_played, weight_exponent);
            if pick < w {
                return Some(m);
            }
            pick -= w;
        }

        moves.last()
    }
}
