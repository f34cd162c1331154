use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use memory_match::{Deck, EngineConfig, GameEngine, GameRng, Palette};

fn bench_deal(c: &mut Criterion) {
    let palette = Palette::default();
    let mut rng = GameRng::new(42);

    for level in [1u32, 4] {
        c.bench_function(&format!("deal_level_{level}"), |b| {
            b.iter(|| Deck::deal(black_box(level), &palette, &mut rng))
        });
    }
}

fn bench_turn(c: &mut Criterion) {
    let mut engine = GameEngine::new(EngineConfig::default().with_seed(7)).unwrap();
    engine.new_game(4);
    engine.advance_clock(Duration::from_secs(4));
    let session = engine.session().clone();

    c.bench_function("flip_and_resolve", |b| {
        b.iter(|| {
            session
                .with_revealed(black_box(0))
                .and_then(|s| s.with_revealed(black_box(1)))
                .and_then(|s| s.resolved(10, 10))
        })
    });
}

criterion_group!(benches, bench_deal, bench_turn);
criterion_main!(benches);
