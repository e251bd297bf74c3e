//! Benchmarks for scoring and ranking
//!
//! Run with: cargo bench --package pipeline

use catalog::Catalog;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{Recommender, ScoringWeights};
use preferences::{PreferenceState, YearRange};
use std::sync::Arc;

fn warm_state() -> PreferenceState {
    let mut state = PreferenceState::new();
    state.like_genre("action");
    state.like_genre("sci-fi");
    state.dislike_genre("horror");
    state.like_movie(9);
    state.set_year_range(YearRange::new(2000, 2015));
    state
}

fn bench_recommend(c: &mut Criterion) {
    let recommender =
        Recommender::with_weights(Arc::new(Catalog::sample().unwrap()), &ScoringWeights::default());

    c.bench_function("recommend_warm", |b| {
        b.iter(|| {
            let mut state = warm_state();
            let movies = recommender.recommend(black_box(&mut state), black_box(5));
            black_box(movies)
        })
    });

    c.bench_function("recommend_cold_start", |b| {
        b.iter(|| {
            let mut state = PreferenceState::new();
            let movies = recommender.recommend(black_box(&mut state), black_box(5));
            black_box(movies)
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let recommender =
        Recommender::with_weights(Arc::new(Catalog::sample().unwrap()), &ScoringWeights::default());
    let state = warm_state();

    c.bench_function("rank_full_catalog", |b| {
        b.iter(|| black_box(recommender.rank(black_box(&state))))
    });
}

criterion_group!(benches, bench_recommend, bench_rank);
criterion_main!(benches);
