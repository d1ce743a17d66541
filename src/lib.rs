//! Chess rules engine built on immutable positions.
//!
//! Positions are assembled once and never edited; `Player::make_move` builds
//! the next one. On top of the rules sit a fixed-depth minimax search, a
//! weighted opening book, FEN and move-text codecs and a turn controller.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod player;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod piece_square_tables;
    pub mod search_config;
}

pub mod tables {
    pub mod opening_book;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_controller;
    pub mod long_algebraic;
    pub mod render_game_state;
}
