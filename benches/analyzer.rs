//! Deck analyzer benchmarks on the base card set.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use royale_deck::cards::base_catalog;
use royale_deck::deck::{share, Deck, DeckAnalyzer};

fn bench_analyze(c: &mut Criterion) {
    let catalog = base_catalog();
    let analyzer = DeckAnalyzer::default();
    let full = share::import("13-12-22-30-10-24-15-4", &catalog).unwrap();
    let heavy = share::import("39-40-48-49-54-26", &catalog).unwrap();

    c.bench_function("analyze_full_deck", |b| {
        b.iter(|| analyzer.analyze(black_box(&full), &catalog))
    });
    c.bench_function("analyze_expensive_partial_deck", |b| {
        b.iter(|| analyzer.analyze(black_box(&heavy), &catalog))
    });
}

fn bench_build(c: &mut Criterion) {
    let catalog = base_catalog();

    c.bench_function("build_deck_by_id", |b| {
        b.iter(|| {
            (1..=8).try_fold(Deck::new(), |deck, id| {
                deck.add_by_id(royale_deck::CardId::new(black_box(id)), &catalog)
            })
        })
    });
    c.bench_function("share_code_import", |b| {
        b.iter(|| share::import(black_box("13-12-22-30-10-24-15-4"), &catalog))
    });
}

criterion_group!(benches, bench_analyze, bench_build);
criterion_main!(benches);
