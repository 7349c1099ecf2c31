use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_showdown::dealer::Dealer;
use poker_showdown::hand::Hand;
use poker_showdown::showdown::compare;

fn parse(code: &str) -> Hand {
    code.parse().expect("valid bench hand")
}

fn bench_rank_code(c: &mut Criterion) {
    let hi = parse("AH KD 7S 5C 2D");
    let full = parse("2H 4S 4C 2D 4H");
    let sf = parse("AS KS QS JS TS");

    let mut g = c.benchmark_group("rank_code");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| black_box(input).rank_code())
    });
    g.bench_with_input(BenchmarkId::new("full_house", "4,4,4,2,2"), &full, |b, input| {
        b.iter(|| black_box(input).rank_code())
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| black_box(input).rank_code())
    });
    g.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut dealer = Dealer::seeded(42);
    let rounds: Vec<_> = (0..256).map(|_| dealer.deal_round().expect("deal")).collect();
    c.bench_function("compare_256_rounds", |b| {
        b.iter(|| {
            for round in &rounds {
                black_box(compare(&round.black, &round.white));
            }
        })
    });
}

criterion_group!(benches, bench_rank_code, bench_compare);
criterion_main!(benches);
