use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dataset::{Dataset, Record};
use sales_engine::{recompute, FilterState, YearRange};

const GENRES: [&str; 12] = [
    "Action", "Adventure", "Fighting", "Misc", "Platform", "Puzzle", "Racing", "Role-Playing",
    "Shooter", "Simulation", "Sports", "Strategy",
];
const PLATFORMS: [&str; 8] = ["DS", "GB", "NES", "PC", "PS2", "PS3", "Wii", "X360"];

/// Roughly the size of the public vgsales table.
fn synthetic_dataset(rows: usize) -> Dataset {
    let records = (0..rows)
        .map(|i| Record {
            genre: GENRES[i % GENRES.len()].to_string(),
            platform: PLATFORMS[(i / 3) % PLATFORMS.len()].to_string(),
            year: 1980 + (i % 37) as i32,
            na_sales: (i % 7) as f64 * 0.1,
            eu_sales: (i % 5) as f64 * 0.1,
            jp_sales: (i % 3) as f64 * 0.1,
            other_sales: 0.01,
            global_sales: (i % 11) as f64 * 0.1,
        })
        .collect();
    Dataset::from_records(records)
}

fn bench_recompute(c: &mut Criterion) {
    let dataset = synthetic_dataset(16_500);
    let default_state = FilterState::default_for(&dataset);
    let narrow_state = default_state
        .with_genres(["Sports", "Racing"])
        .with_platforms(["Wii"])
        .with_year_range(YearRange::new(2005, 2010));

    c.bench_function("recompute_default_selection", |b| {
        b.iter(|| recompute(black_box(&dataset), black_box(&default_state)))
    });

    c.bench_function("recompute_narrow_selection", |b| {
        b.iter(|| recompute(black_box(&dataset), black_box(&narrow_state)))
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
