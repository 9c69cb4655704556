// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tpb_scrape::scrape::normalize_title;

const SAMPLES: &[&str] = &[
    "The.Matrix.1999.720p.BluRay",
    "Movie.Name.2001.1080p",
    "(Parenthesized).Title.2010.WEBRip.x264-GRP",
    "-Dashed-.Release.2015.BRRip",
    "Short.1998",
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_title", |b| {
        b.iter(|| {
            for raw in SAMPLES {
                let _ = normalize_title(black_box(raw));
            }
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
