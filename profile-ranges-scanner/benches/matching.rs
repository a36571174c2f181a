use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use profile_ranges::{Range, RangeTable};
use profile_ranges_scanner::match_reader;

fn measurements(points: usize) -> String {
    let mut text = String::new();
    for i in 0..points {
        text.push_str(&format!("#point_{i}#,{}\n", i * 37));
    }
    text
}

fn ranges(count: usize, points: usize) -> RangeTable {
    (0..count)
        .map(|i| {
            Range::new(
                format!("range_{i}"),
                format!("#point_{}#", i % points),
                format!("#point_{}#", (i * 7 + 3) % points),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

fn match_file(c: &mut Criterion) {
    let input = measurements(10_000);
    let ranges = ranges(64, 10_000);

    c.bench_function("match 10k lines x 64 ranges", |b| {
        b.iter(|| match_reader(black_box(&ranges), black_box(input.as_bytes())).unwrap());
    });
}

criterion_group!(benches, match_file);
criterion_main!(benches);
