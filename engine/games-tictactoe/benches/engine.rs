use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use engine_core::Rules;
use games_tictactoe::{Action, State, TicTacToe};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_legal_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_legal_actions");
    let rules = TicTacToe::new();

    group.bench_function("opening", |b| {
        let state = rules.starting_state();
        b.iter(|| black_box(rules.legal_actions(&state)));
    });

    group.bench_function("midgame", |b| {
        let state = State::from_moves(&[4, 0, 8, 2]);
        b.iter(|| black_box(rules.legal_actions(&state)));
    });

    group.finish();
}

fn bench_next_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_next_state");
    let rules = TicTacToe::new();

    group.bench_function("place_center", |b| {
        let state = rules.starting_state();
        b.iter_batched(
            || state,
            |state| rules.next_state(&state, &Action::Place(4)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_playout");
    let rules = TicTacToe::new();

    group.bench_function("random_to_terminal", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        b.iter(|| {
            let mut state = rules.starting_state();
            while !rules.is_ended(&state) {
                let actions = rules.legal_actions(&state);
                let action = actions.choose(&mut rng).copied().unwrap();
                state = rules.next_state(&state, &action);
            }
            black_box(state)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_legal_actions,
    bench_next_state,
    bench_random_playout
);
criterion_main!(benches);
