use std::error::Error;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use oak_chess::engines::engine_random::RandomEngine;
use oak_chess::engines::engine_trait::MoveStrategy;
use oak_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use oak_chess::search::minimax::MiniMax;
use oak_chess::search::search_config::SearchConfig;
use oak_chess::tables::opening_book::OpeningBook;
use oak_chess::utils::fen_generator::generate_fen;
use oak_chess::utils::fen_parser::parse_fen;
use oak_chess::utils::game_controller::{GameController, GameStatus, PlayerControl};
use oak_chess::utils::render_game_state::render_position;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

/// Play a game between two engines and print the board after every ply.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(STARTING_POSITION_FEN))]
    fen: String,

    /// Minimax search depth in plies.
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Opening book file (`pos <fen>` blocks). Uses the bundled book when omitted.
    #[arg(short, long)]
    book: Option<String>,

    /// Disable opening-book lookups.
    #[arg(long)]
    no_book: bool,

    #[arg(long, default_value_t = 0.5)]
    book_weight: f64,

    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 80)]
    max_plies: usize,

    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    white: EngineKind,

    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    black: EngineKind,
}

fn build_engine(kind: EngineKind, config: SearchConfig, book: Option<&Arc<OpeningBook>>) -> Box<dyn MoveStrategy> {
    match kind {
        EngineKind::Minimax => {
            let search = MiniMax::new(config);
            match book {
                Some(book) => Box::new(search.with_book(Arc::clone(book))),
                None => Box::new(search),
            }
        }
        EngineKind::Random => match config.seed {
            Some(seed) => Box::new(RandomEngine::seeded(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let position = parse_fen(&args.fen)?;

    let book = if args.no_book {
        None
    } else {
        let book = match &args.book {
            Some(path) => OpeningBook::from_path(path)?,
            None => OpeningBook::load_default()?,
        };
        Some(Arc::new(book))
    };

    let mut config = SearchConfig::default()
        .with_depth(args.depth)
        .with_book_weight_exponent(args.book_weight);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let white = build_engine(args.white, config, book.as_ref());
    let black = build_engine(args.black, config, book.as_ref());
    println!("White: {}  Black: {}", white.name(), black.name());
    println!("{}\n", render_position(&position));

    let mut controller = GameController::new(position, PlayerControl::Engine(white), PlayerControl::Engine(black));

    for ply in 1..=args.max_plies {
        if controller.game_status().is_finished() {
            break;
        }
        let Some(turn) = controller.engine_move() else {
            break;
        };
        if !turn.is_played() {
            println!("{ply}. engine could not play ({:?})", turn.status);
            break;
        }
        let outcome = turn.outcome;
        let Some(mv) = outcome.best_move else {
            break;
        };
        println!(
            "{ply}. {mv} ({:?}, {} boards, {} ms)",
            outcome.source,
            outcome.boards_evaluated,
            outcome.elapsed.as_millis()
        );
        println!("{}\n", render_position(controller.position()));
    }

    match controller.game_status() {
        GameStatus::Checkmate { winner } => println!("Checkmate, {winner} wins"),
        GameStatus::Stalemate => println!("Stalemate"),
        GameStatus::InProgress => println!("Stopped after {} plies", controller.move_log().len()),
    }
    println!("Final FEN: {}", generate_fen(controller.position()));

    Ok(())
}
