//! Immutable game positions.
//!
//! A `Position` is assembled once from a set of pieces. Assembly generates
//! both sides' candidate moves, their check flags and their castles, so a
//! finished position answers every rule query without further work. Moves
//! never edit a position; they build the next one.

use std::sync::OnceLock;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_valid_square;
use crate::game_state::chess_types::{Alliance, PieceKind, Square};
use crate::game_state::piece::{KingRights, Piece};
use crate::game_state::player::Player;
use crate::move_generation::castling::generate_castle_moves;
use crate::move_generation::legal_move_checks::attacks_on_square;
use crate::moves::chess_move::Move;

/// Per-side data computed during assembly.
#[derive(Debug, Clone)]
pub(crate) struct PlayerState {
    pub(crate) alliance: Alliance,
    pub(crate) king: Piece,
    /// Candidate moves plus castles; self-check is filtered by `make_move`.
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
    /// Lazily computed "has at least one move that does not leave the king
    /// in check".
    pub(crate) escape: OnceLock<bool>,
}

#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    side_to_move: Alliance,
    transition_move: Move,
    halfmove_clock: u16,
    fullmove_number: u16,
    white: PlayerState,
    black: PlayerState,
}

impl Position {
    /// Assemble a position with fresh move counters.
    pub fn new<I>(pieces: I, side_to_move: Alliance, en_passant_pawn: Option<Piece>) -> ChessResult<Self>
    where
        I: IntoIterator<Item = Piece>,
    {
        Self::with_counters(pieces, side_to_move, en_passant_pawn, 0, 1)
    }

    pub fn with_counters<I>(
        pieces: I,
        side_to_move: Alliance,
        en_passant_pawn: Option<Piece>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self>
    where
        I: IntoIterator<Item = Piece>,
    {
        let pieces: Vec<Piece> = pieces.into_iter().collect();
        if let Some(bad) = pieces
            .iter()
            .chain(en_passant_pawn.iter())
            .find(|piece| !is_valid_square(piece.square()))
        {
            return Err(ChessError::InvalidSquare(bad.square()));
        }
        Self::build(
            Board::from_pieces(pieces, en_passant_pawn),
            side_to_move,
            Move::Null,
            halfmove_clock,
            fullmove_number,
        )
    }

    /// The standard initial position.
    pub fn standard() -> Self {
        const BACK_ROW: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let rights = KingRights {
            king_side_castle_capable: true,
            queen_side_castle_capable: true,
            castled: false,
        };

        let mut pieces = Vec::with_capacity(32);
        for (alliance, back_row, pawn_row) in [(Alliance::Black, 0u8, 1u8), (Alliance::White, 7, 6)] {
            for (column, kind) in (0u8..).zip(BACK_ROW) {
                let square = back_row * 8 + column;
                pieces.push(match kind {
                    PieceKind::King => Piece::king(square, alliance, true, rights),
                    _ => Piece::new(kind, square, alliance),
                });
                pieces.push(Piece::new(PieceKind::Pawn, pawn_row * 8 + column, alliance));
            }
        }

        let white_king = Piece::king(60, Alliance::White, true, rights);
        let black_king = Piece::king(4, Alliance::Black, true, rights);
        Self::assemble(
            Board::from_pieces(pieces, None),
            Alliance::White,
            Move::Null,
            (0, 1),
            white_king,
            black_king,
        )
    }

    pub(crate) fn build(
        board: Board,
        side_to_move: Alliance,
        transition_move: Move,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        let white_king = establish_king(&board, Alliance::White)?;
        let black_king = establish_king(&board, Alliance::Black)?;
        Ok(Self::assemble(
            board,
            side_to_move,
            transition_move,
            (halfmove_clock, fullmove_number),
            white_king,
            black_king,
        ))
    }

    fn assemble(
        board: Board,
        side_to_move: Alliance,
        transition_move: Move,
        (halfmove_clock, fullmove_number): (u16, u16),
        white_king: Piece,
        black_king: Piece,
    ) -> Self {
        let white_candidates = candidate_moves(&board, Alliance::White);
        let black_candidates = candidate_moves(&board, Alliance::Black);

        let white = assemble_player(&board, white_king, white_candidates.clone(), &black_candidates);
        let black = assemble_player(&board, black_king, black_candidates, &white_candidates);

        Self {
            board,
            side_to_move,
            transition_move,
            halfmove_clock,
            fullmove_number,
            white,
            black,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn tile_at(&self, square: Square) -> Option<&Piece> {
        self.board.tile_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.board.en_passant_pawn()
    }

    /// The move that produced this position; `Move::Null` for a constructed one.
    #[inline]
    pub fn transition_move(&self) -> &Move {
        &self.transition_move
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn active_pieces(&self, alliance: Alliance) -> impl Iterator<Item = &Piece> {
        self.board.active_pieces(alliance)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        let state = match alliance {
            Alliance::White => &self.white,
            Alliance::Black => &self.black,
        };
        Player::new(self, state)
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Every generated move of both sides, White first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white.legal_moves.iter().chain(self.black.legal_moves.iter())
    }

    /// The mover's generated move from `origin` to `destination`, if any.
    pub fn find_move(&self, origin: Square, destination: Square) -> Option<Move> {
        self.current_player()
            .legal_moves()
            .iter()
            .find(|mv| mv.origin() == Some(origin) && mv.destination() == Some(destination))
            .copied()
    }
}

fn establish_king(board: &Board, alliance: Alliance) -> ChessResult<Piece> {
    let mut kings = board.active_pieces(alliance).filter(|piece| piece.is_king());
    match (kings.next(), kings.count()) {
        (Some(king), 0) => Ok(*king),
        (first, rest) => Err(ChessError::InvalidKingCount {
            alliance,
            count: usize::from(first.is_some()) + rest,
        }),
    }
}

fn candidate_moves(board: &Board, alliance: Alliance) -> Vec<Move> {
    board
        .active_pieces(alliance)
        .flat_map(|piece| piece.candidate_moves(board))
        .collect()
}

fn assemble_player(board: &Board, king: Piece, mut moves: Vec<Move>, opponent_moves: &[Move]) -> PlayerState {
    let in_check = attacks_on_square(king.square(), opponent_moves).next().is_some();
    generate_castle_moves(board, &king, in_check, opponent_moves, &mut moves);
    PlayerState {
        alliance: king.alliance(),
        king,
        legal_moves: moves,
        in_check,
        escape: OnceLock::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_generator::generate_fen;
    use crate::utils::fen_parser::parse_fen;
    use crate::game_state::chess_types::{Alliance, PieceKind};
    use crate::game_state::piece::{KingRights, Piece};
    use crate::moves::chess_move::Move;

    #[test]
    fn standard_position_has_twenty_moves_per_side() {
        let position = Position::standard();
        assert_eq!(position.side_to_move(), Alliance::White);
        assert_eq!(position.white_player().legal_moves().len(), 20);
        assert_eq!(position.black_player().legal_moves().len(), 20);
        assert_eq!(position.active_pieces(Alliance::White).count(), 16);
        assert!(position.transition_move().is_null());
        assert!(position.en_passant_pawn().is_none());
    }

    #[test]
    fn standard_position_matches_starting_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&Position::standard()), generate_fen(&parsed));
        for square in 0..64u8 {
            assert_eq!(Position::standard().tile_at(square), parsed.tile_at(square));
        }
    }

    #[test]
    fn missing_king_is_rejected() {
        let err = Position::new(
            [Piece::king(60, Alliance::White, false, KingRights::default())],
            Alliance::White,
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ChessError::InvalidKingCount {
                alliance: Alliance::Black,
                count: 0
            }
        );
    }

    #[test]
    fn off_board_square_is_rejected() {
        let pieces = [
            Piece::king(60, Alliance::White, false, KingRights::default()),
            Piece::king(4, Alliance::Black, false, KingRights::default()),
            Piece::new(PieceKind::Rook, 64, Alliance::White),
        ];
        assert_eq!(
            Position::new(pieces, Alliance::White, None).unwrap_err(),
            ChessError::InvalidSquare(64)
        );

        let kings = [
            Piece::king(60, Alliance::White, false, KingRights::default()),
            Piece::king(4, Alliance::Black, false, KingRights::default()),
        ];
        let stray_pawn = Piece::new(PieceKind::Pawn, 200, Alliance::Black);
        assert_eq!(
            Position::new(kings, Alliance::White, Some(stray_pawn)).unwrap_err(),
            ChessError::InvalidSquare(200)
        );
    }

    #[test]
    fn two_kings_of_one_side_are_rejected() {
        let pieces = [
            Piece::king(60, Alliance::White, false, KingRights::default()),
            Piece::king(4, Alliance::Black, false, KingRights::default()),
            Piece::king(7, Alliance::Black, false, KingRights::default()),
        ];
        assert!(matches!(
            Position::new(pieces, Alliance::White, None),
            Err(ChessError::InvalidKingCount { count: 2, .. })
        ));
    }

    #[test]
    fn check_flag_comes_from_opponent_candidates() {
        let pieces = [
            Piece::king(60, Alliance::White, false, KingRights::default()),
            Piece::king(4, Alliance::Black, false, KingRights::default()),
            Piece::with_first_move(PieceKind::Rook, 12, Alliance::Black, false),
        ];
        let position = Position::new(pieces, Alliance::White, None).expect("valid position");
        assert!(position.white_player().is_in_check());
        assert!(!position.black_player().is_in_check());
    }

    #[test]
    fn find_move_only_searches_the_mover() {
        let position = Position::standard();
        assert!(matches!(position.find_move(52, 36), Some(Move::PawnJump { .. })));
        assert!(position.find_move(12, 28).is_none());
        assert!(position.find_move(52, 28).is_none());
    }
}
