//! Playout benchmarks.
//!
//! Run with: cargo bench
//!
//! Tracks the cost of dealing, enumerating legal moves and playing whole
//! scripted games, the hot paths for self-play.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jaipur_engine::core::{GameRng, GameState, JaipurConfig, PlayerId};
use jaipur_engine::game::GameBuilder;
use jaipur_engine::rules::{JaipurRules, RulesEngine};

fn bench_deal(c: &mut Criterion) {
    let config = JaipurConfig::default();
    c.bench_function("deal", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(GameState::new(&config, &mut GameRng::new(seed)))
        })
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let rules = JaipurRules::default();
    let state = GameState::new(rules.config(), &mut GameRng::new(42));
    c.bench_function("legal_actions_opening", |b| {
        b.iter(|| black_box(rules.legal_actions(black_box(&state), PlayerId::FIRST)))
    });
}

fn bench_scripted_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripted_playout");
    for seed in [1u64, 42, 2024] {
        group.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, &seed| {
            b.iter(|| {
                let mut game = GameBuilder::new()
                    .build(seed)
                    .expect("default config is valid");
                black_box(game.play_to_end(1_000))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_deal, bench_legal_actions, bench_scripted_playout);
criterion_main!(benches);
