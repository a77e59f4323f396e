//! 完整評估基準測試

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use ssf_calc::FeasibilityEngine;
use ssf_core::ProjectParameters;

fn bench_evaluate(c: &mut Criterion) {
    let engine = FeasibilityEngine::default();
    let params = ProjectParameters::default()
        .with_classroom_count(20)
        .with_panel_efficiency_pct(Decimal::new(205, 1))
        .with_construction_months(24);

    c.bench_function("evaluate_full_report", |b| {
        b.iter(|| engine.evaluate(black_box(&params)).unwrap())
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
