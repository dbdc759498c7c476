use std::time::Instant;

use slide_merge_rules::{Board, Direction, GameConfig, LossDeterminableGame, NoopObserver};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

type BenchBoard = Board<NoopObserver, SmallRng>;

fn fresh_board(config: &GameConfig, seed: u64) -> BenchBoard {
    let mut board = Board::new(config, NoopObserver(), SmallRng::seed_from_u64(seed)).unwrap();
    for _ in 0..config.opening_tiles {
        board.insert_at_random_empty_cell(config.opening_value);
    }
    board
}

/// plays random moves until the board is stuck, returns the number of moves applied
fn play_till_end(board: &mut BenchBoard, rng: &mut SmallRng) -> u64 {
    let mut moves = 0;
    while !board.has_lost() {
        let direction = Direction::from_index(rng.gen_range(0..4));
        if board.apply(direction) {
            board.spawn_random_tile();
        }
        moves += 1;
    }
    moves
}

fn bench_random_games(b: &mut Bencher, config: GameConfig) {
    b.iter_custom(|iter_count| {
        let mut rng = SmallRng::seed_from_u64(iter_count);
        let mut total_iterations = 0;

        let start = Instant::now();
        while total_iterations < iter_count {
            let mut board = fresh_board(&config, total_iterations);
            black_box(play_till_end(&mut board, &mut rng));
            total_iterations += 1;
        }
        start.elapsed()
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("RandomGames");
    g.bench_function("classic 4x4", |b| {
        bench_random_games(b, GameConfig::default());
    });
    g.bench_function("5x5", |b| {
        bench_random_games(b, GameConfig::new(5, 2048));
    });
    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
