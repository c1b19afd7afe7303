use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::{Board, Difficulty, EngineConfig, GameRng, MatchingEngine, SymbolCatalog};

fn bench_deal(c: &mut Criterion) {
    let catalog = SymbolCatalog::default();
    let symbols = catalog.take(Difficulty::Hard.pair_count());
    let mut rng = GameRng::new(42);

    c.bench_function("deal_hard", |b| {
        b.iter(|| Board::deal(black_box(symbols), 1, &mut rng))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let mut engine = MatchingEngine::new(EngineConfig::new(42)).unwrap();

    c.bench_function("perfect_game_easy", |b| {
        b.iter(|| {
            engine.start_or_restart();
            engine.advance(Duration::from_secs(2));
            let cards = engine.board().cards().to_vec();
            for card in &cards {
                if let Some(other) = cards.iter().find(|o| card.pairs_with(o)) {
                    engine.select_card(card.index);
                    engine.select_card(other.index);
                }
            }
            engine.drain_events();
            black_box(engine.final_moves())
        })
    });
}

criterion_group!(benches, bench_deal, bench_full_game);
criterion_main!(benches);
