//! FEN-to-Position parser.
//!
//! Beyond the board layout, the parser derives the per-piece flags a FEN only
//! implies: pawns on their start row and rooks named by a castle right are
//! unmoved, and kings carry the castle letters of their side. The resulting
//! position must be reachable in play, so the side not to move may not be in
//! check and an en-passant target needs a pawn that just jumped past it.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::castle_squares;
use crate::game_state::chess_types::{Alliance, CastleSide, PieceKind, Square};
use crate::game_state::piece::{KingRights, Piece};
use crate::game_state::position::Position;
use crate::utils::algebraic::algebraic_to_square;

/// Castle letters present in a FEN, indexed by `Alliance::index()`.
#[derive(Debug, Clone, Copy, Default)]
struct CastleLetters {
    king_side: [bool; 2],
    queen_side: [bool; 2],
}

impl CastleLetters {
    fn allows(&self, alliance: Alliance, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_side[alliance.index()],
            CastleSide::QueenSide => self.queen_side[alliance.index()],
        }
    }
}

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let placements = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let letters = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid fullmove number: {fullmove_part}")))?;

    let pieces: Vec<Piece> = placements
        .iter()
        .map(|&(square, alliance, kind)| build_piece(square, alliance, kind, &letters))
        .collect();

    let en_passant_pawn = match en_passant_target {
        None => None,
        Some(target) => Some(find_en_passant_pawn(&pieces, target, side_to_move)?),
    };

    let position = Position::with_counters(pieces, side_to_move, en_passant_pawn, halfmove_clock, fullmove_number)?;

    if position.player(side_to_move.opposite()).is_in_check() {
        return Err(invalid(format!("{} is in check but not to move", side_to_move.opposite())));
    }

    Ok(position)
}

fn invalid(reason: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(reason.into())
}

fn parse_board(board_part: &str) -> ChessResult<Vec<(Square, Alliance, PieceKind)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut placements = Vec::with_capacity(32);
    // FEN lists rank 8 first, which is also row 0 of the board.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let (alliance, kind) =
                piece_from_fen_char(ch).ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            placements.push(((row * 8 + file) as Square, alliance, kind));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(placements)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Alliance> {
    match side_part {
        "w" => Ok(Alliance::White),
        "b" => Ok(Alliance::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastleLetters> {
    let mut letters = CastleLetters::default();
    if castling_part == "-" {
        return Ok(letters);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => letters.king_side[Alliance::White.index()] = true,
            'Q' => letters.queen_side[Alliance::White.index()] = true,
            'k' => letters.king_side[Alliance::Black.index()] = true,
            'q' => letters.queen_side[Alliance::Black.index()] = true,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(letters)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))
}

fn build_piece(square: Square, alliance: Alliance, kind: PieceKind, letters: &CastleLetters) -> Piece {
    let sides = [CastleSide::KingSide, CastleSide::QueenSide];
    match kind {
        PieceKind::Pawn => Piece::with_first_move(kind, square, alliance, alliance.is_pawn_start_square(square)),
        PieceKind::Rook => {
            let named = sides
                .iter()
                .any(|&side| letters.allows(alliance, side) && castle_squares(alliance, side).rook_start == square);
            Piece::with_first_move(kind, square, alliance, named)
        }
        PieceKind::King => {
            let on_start = castle_squares(alliance, CastleSide::KingSide).king_start == square;
            let rights = KingRights {
                king_side_castle_capable: on_start && letters.allows(alliance, CastleSide::KingSide),
                queen_side_castle_capable: on_start && letters.allows(alliance, CastleSide::QueenSide),
                castled: false,
            };
            let first_move = rights.king_side_castle_capable || rights.queen_side_castle_capable;
            Piece::king(square, alliance, first_move, rights)
        }
        _ => Piece::new(kind, square, alliance),
    }
}

/// The pawn that just jumped over `target`. It belongs to the side not to
/// move and stands one step beyond the target in its own direction.
fn find_en_passant_pawn(pieces: &[Piece], target: Square, side_to_move: Alliance) -> ChessResult<Piece> {
    let jumper = side_to_move.opposite();
    let expected = i16::from(target) + i16::from(jumper.forward_offset());
    pieces
        .iter()
        .find(|piece| {
            piece.kind() == PieceKind::Pawn && piece.alliance() == jumper && i16::from(piece.square()) == expected
        })
        .copied()
        .ok_or_else(|| invalid(format!("no {jumper} pawn behind en-passant square {target}")))
}

fn piece_from_fen_char(ch: char) -> Option<(Alliance, PieceKind)> {
    let alliance = if ch.is_ascii_uppercase() {
        Alliance::White
    } else if ch.is_ascii_lowercase() {
        Alliance::Black
    } else {
        return None;
    };

    Some((alliance, PieceKind::from_letter(ch)?))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Alliance, PieceKind};
    use crate::utils::render_game_state::render_position;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_position(&position));

        assert_eq!(position.side_to_move(), Alliance::White);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.tile_at(60).map(|p| p.kind()), Some(PieceKind::King));
        assert!(position.tile_at(48).is_some_and(|p| p.is_first_move()));
        assert!(position.white_player().is_king_side_castle_capable());
        assert!(position.black_player().is_queen_side_castle_capable());
    }

    #[test]
    fn en_passant_target_resolves_to_jumped_pawn() {
        let position =
            parse_fen("rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 2").expect("FEN should parse");
        let pawn = position.en_passant_pawn().expect("en-passant pawn");
        assert_eq!(pawn.square(), 28);
        assert_eq!(pawn.alliance(), Alliance::Black);
    }

    #[test]
    fn en_passant_target_without_pawn_is_rejected() {
        let err = parse_fen("4k3/8/8/8/8/8/8/4K3 w - e6 0 1").unwrap_err();
        assert!(matches!(err, ChessError::InvalidFen(_)));
    }

    #[test]
    fn side_not_to_move_in_check_is_rejected() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4KR2 w - - 0 1").is_ok());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").is_err());
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert!(parse_fen("8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w X - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0").is_err());
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::InvalidKingCount { .. })
        ));
    }

    #[test]
    fn castle_letters_only_mark_rooks_in_their_corners() {
        let position = parse_fen("r3k3/8/8/8/8/8/8/4K2R w Kq - 0 1").expect("FEN should parse");
        assert!(position.tile_at(63).is_some_and(|p| p.is_first_move()));
        assert!(position.tile_at(0).is_some_and(|p| p.is_first_move()));
        assert!(position.white_player().is_king_side_castle_capable());
        assert!(!position.white_player().is_queen_side_castle_capable());
        assert!(!position.black_player().is_king_side_castle_capable());
    }
}
