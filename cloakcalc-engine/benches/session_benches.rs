// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use cloakcalc_engine::{
    navigation::RecordingNavigator, sequence::SequenceLog, token::parse_tokens, PatternMatcher,
    Session,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};

fn bench_keystrokes(c: &mut Criterion) {
    // a long session with noise before the hidden sequence
    let keys = parse_tokens(&format!("{}777+777=", "12×3-4.5+".repeat(500))).unwrap();

    let mut group = c.benchmark_group("session_press");
    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
        .noise_threshold(0.02);

    group.bench_with_input(
        BenchmarkId::from_parameter(format!("{}_keys", keys.len())),
        &keys,
        |b, keys| {
            b.iter(|| {
                let mut session = Session::default();
                let mut navigator = RecordingNavigator::default();
                for token in keys {
                    session.press(*token, &mut navigator);
                }
                assert_eq!(navigator.routes.len(), 1);
            });
        },
    );

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let matcher = PatternMatcher::default();
    let log: SequenceLog = parse_tokens(&"98+76=".repeat(1_000))
        .unwrap()
        .into_iter()
        .collect();

    c.bench_function("matcher_evaluate_6k_log", |b| {
        b.iter(|| std::hint::black_box(matcher.evaluate(std::hint::black_box(&log))));
    });
}

criterion_group!(benches, bench_keystrokes, bench_evaluate);
criterion_main!(benches);
