//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for logs, tests and the self-play
//! binary.

use crate::game_state::chess_types::{Alliance, PieceKind};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for column in 0..8u8 {
            match position.tile_at(row * 8 + column) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.alliance(), piece.kind()) {
        (Alliance::White, PieceKind::Pawn) => '♙',
        (Alliance::White, PieceKind::Knight) => '♘',
        (Alliance::White, PieceKind::Bishop) => '♗',
        (Alliance::White, PieceKind::Rook) => '♖',
        (Alliance::White, PieceKind::Queen) => '♕',
        (Alliance::White, PieceKind::King) => '♔',
        (Alliance::Black, PieceKind::Pawn) => '♟',
        (Alliance::Black, PieceKind::Knight) => '♞',
        (Alliance::Black, PieceKind::Bishop) => '♝',
        (Alliance::Black, PieceKind::Rook) => '♜',
        (Alliance::Black, PieceKind::Queen) => '♛',
        (Alliance::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_position;
    use crate::game_state::position::Position;

    #[test]
    fn black_back_rank_is_drawn_first() {
        let rendered = render_position(&Position::standard());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
    }
}
