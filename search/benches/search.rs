//! Benchmarks for expansion, extraction and the full search.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fws_search::{expand, Params, RuleTable, Search, SearchLimits};

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    group.throughput(Throughput::Elements(1));

    let table = RuleTable::build(&Params::DEFAULT);
    let start = table.start();

    group.bench_function("expand_start", |b| {
        b.iter(|| black_box(expand(black_box(&table), black_box(start))));
    });

    let block = expand(&table, start);
    group.bench_function("sub_patterns", |b| {
        b.iter(|| black_box(black_box(&block).sub_patterns().count()));
    });
    group.bench_function("words", |b| {
        b.iter(|| black_box(black_box(&block).words().count()));
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    for (n, a, b_, c_) in [(9, 3, 4, 5), (10, 5, 6, 7), (15, 7, 8, 11)] {
        let Ok(params) = Params::new(n, a, b_, c_) else {
            continue;
        };
        let table = RuleTable::build(&params);
        group.bench_function(format!("exhaustive_{}", params), |b| {
            b.iter(|| black_box(Search::new(&table).run(()).state.word_count()));
        });
    }

    let table = RuleTable::build(&Params::DEFAULT);
    let limits = SearchLimits {
        max_depth: Some(20),
        max_steps: None,
    };
    group.bench_function("depth_20", |b| {
        b.iter(|| {
            black_box(
                Search::new(&table)
                    .with_limits(limits)
                    .run(())
                    .state
                    .pattern_count(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_expand, bench_search);
criterion_main!(benches);
