//! Fixed-depth minimax search with an optional opening-book shortcut.
//!
//! No pruning: every playable move is expanded to the configured depth. The
//! root picks the strictly best child, so the first move found wins ties.
//! Polarity alternates once per ply; White's root maximises and Black's
//! root minimises.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::engines::engine_trait::{MoveSource, MoveStrategy, SearchOutcome};
use crate::game_state::position::Position;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardEvaluator, StandardBoardEvaluator};
use crate::search::search_config::SearchConfig;
use crate::tables::opening_book::OpeningBook;
use crate::utils::long_algebraic::parse_long_algebraic;

pub struct MiniMax<E: BoardEvaluator = StandardBoardEvaluator> {
    evaluator: E,
    config: SearchConfig,
    book: Option<Arc<OpeningBook>>,
    rng: StdRng,
    boards_evaluated: u64,
}

impl MiniMax<StandardBoardEvaluator> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(StandardBoardEvaluator, config)
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    pub fn with_evaluator(evaluator: E, config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            evaluator,
            config,
            book: None,
            rng,
            boards_evaluated: 0,
        }
    }

    pub fn with_book(mut self, book: Arc<OpeningBook>) -> Self {
        self.book = Some(book);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for the side to move. A depth of zero searches one ply.
    pub fn search(&mut self, position: &Position) -> SearchOutcome {
        let start = Instant::now();
        self.boards_evaluated = 0;
        let player = position.current_player();
        let depth = self.config.depth.max(1);
        debug!(side = %player.alliance(), depth, "search started");

        if let Some(mv) = self.book_move(position) {
            return SearchOutcome {
                best_move: Some(mv),
                score: None,
                source: MoveSource::Book,
                boards_evaluated: 0,
                elapsed: start.elapsed(),
            };
        }

        let maximizing = player.alliance().is_white();
        let mut best: Option<(Move, i32)> = None;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if !transition.status().is_done() {
                continue;
            }
            let value = if maximizing {
                self.min(transition.position(), depth - 1)
            } else {
                self.max(transition.position(), depth - 1)
            };
            let improves = match best {
                None => true,
                Some((_, seen)) if maximizing => value > seen,
                Some((_, seen)) => value < seen,
            };
            if improves {
                best = Some((*transition.attempted_move(), value));
            }
        }

        let elapsed = start.elapsed();
        match best {
            Some((mv, score)) => {
                info!(
                    best = %mv,
                    score,
                    boards = self.boards_evaluated,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "search finished"
                );
                SearchOutcome {
                    best_move: Some(mv),
                    score: Some(score),
                    source: MoveSource::Search,
                    boards_evaluated: self.boards_evaluated,
                    elapsed,
                }
            }
            None => {
                info!(side = %player.alliance(), "no playable move");
                SearchOutcome {
                    boards_evaluated: self.boards_evaluated,
                    ..SearchOutcome::no_move(MoveSource::Search, elapsed)
                }
            }
        }
    }

    fn min(&mut self, position: &Position, depth: u32) -> i32 {
        if depth == 0 || is_game_over(position) {
            return self.evaluate(position, depth);
        }
        let player = position.current_player();
        let mut lowest = i32::MAX;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.status().is_done() {
                lowest = lowest.min(self.max(transition.position(), depth - 1));
            }
        }
        lowest
    }

    fn max(&mut self, position: &Position, depth: u32) -> i32 {
        if depth == 0 || is_game_over(position) {
            return self.evaluate(position, depth);
        }
        let player = position.current_player();
        let mut highest = i32::MIN;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.status().is_done() {
                highest = highest.max(self.min(transition.position(), depth - 1));
            }
        }
        highest
    }

    #[inline]
    fn evaluate(&mut self, position: &Position, depth: u32) -> i32 {
        self.boards_evaluated += 1;
        self.evaluator.evaluate(position, depth)
    }

    /// A playable move drawn from the book, if the position is in it.
    fn book_move(&mut self, position: &Position) -> Option<Move> {
        let book = self.book.as_ref()?;
        let entry = book.choose_weighted_move(position, self.config.book_weight_exponent, &mut self.rng)?;
        match parse_long_algebraic(position, &entry.move_string) {
            Ok(mv) if position.current_player().make_move(&mv).status().is_done() => {
                debug!(book_move = %entry.move_string, "book hit");
                Some(mv)
            }
            Ok(_) => {
                warn!(book_move = %entry.move_string, "book move leaves the king in check; searching instead");
                None
            }
            Err(err) => {
                warn!(book_move = %entry.move_string, %err, "book move rejected; searching instead");
                None
            }
        }
    }
}

/// Checkmate or stalemate for the side to move.
#[inline]
fn is_game_over(position: &Position) -> bool {
    !position.current_player().has_escape_moves()
}

impl<E: BoardEvaluator> MoveStrategy for MiniMax<E> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, position: &Position) -> SearchOutcome {
        self.search(position)
    }
}
