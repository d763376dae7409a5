use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use janggi::game_state::game_state::GameState;
use janggi::game_state::janggi_types::Side;
use janggi::move_generation::legal_move_checks::is_general_in_check;
use janggi::move_generation::legal_move_generator::{legal_destinations, legal_moves_for_side};

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A reproducible mid-game reached by seeded random play.
fn scrambled_game(seed: u64, plies: usize) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new_game();
    for _ in 0..plies {
        let moves = game.moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.try_move(mv.from, mv.to).expect("generated move is legal");
        if game.is_over() {
            game.undo();
            break;
        }
    }
    game
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let games = [("opening", GameState::new_game()), ("scrambled", scrambled_game(2024, 40))];

    for (name, game) in &games {
        // Correctness guard before benchmarking.
        let side = game.side_to_move();
        let all = legal_moves_for_side(game.position(), side);
        assert!(!all.is_empty(), "{name} should have moves for {side}");

        group.bench_function(format!("side_moves_{name}"), |b| {
            b.iter(|| black_box(legal_moves_for_side(black_box(game.position()), side).len()))
        });

        group.bench_function(format!("per_piece_{name}"), |b| {
            b.iter(|| {
                let position = black_box(game.position());
                position
                    .pieces()
                    .map(|piece| legal_destinations(position, &piece).len())
                    .sum::<usize>()
            })
        });

        group.bench_function(format!("check_{name}"), |b| {
            b.iter(|| {
                let position = black_box(game.position());
                black_box(is_general_in_check(position, Side::Blue) | is_general_in_check(position, Side::Red))
            })
        });
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_movegen);
criterion_main!(movegen_benches);
