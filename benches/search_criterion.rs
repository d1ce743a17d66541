use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use oak_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use oak_chess::search::minimax::MiniMax;
use oak_chess::search::search_config::SearchConfig;
use oak_chess::utils::fen_parser::parse_fen;

const POSITIONS: &[(&str, &str)] = &[
    ("start", STARTING_POSITION_FEN),
    ("open_middlegame", "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let position = parse_fen(fen).expect("benchmark FEN should parse");
        for depth in [1u32, 2] {
            let config = SearchConfig::default().with_depth(depth).with_seed(1);
            group.bench_with_input(BenchmarkId::new(*name, depth), &position, |b, position| {
                b.iter(|| {
                    let mut search = MiniMax::new(config);
                    let outcome = search.search(black_box(position));
                    black_box(outcome.best_move)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_minimax);
criterion_main!(search_benches);
