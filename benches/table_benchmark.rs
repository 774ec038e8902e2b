//! Benchmarks for sorting and drawing the story table.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use storylist::models::Story;
use storylist::ui::interaction::HitAreaRegistry;
use storylist::ui::table::render_table;
use storylist::view_state::{SortKey, TablePresenter};

/// Stories with varied titles, authors and points; every seventh has no points.
fn generate_stories(count: usize) -> Vec<Story> {
    (0..count)
        .map(|i| Story {
            title: Some(format!("Story number {} about {}", (i * 7919) % count, i % 13)),
            author: Some(format!("user{}", (i * 31) % 97)),
            points: if i % 7 == 0 { None } else { Some(((i * 131) % 500) as i64) },
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1000, 10_000].iter() {
        let stories = generate_stories(*size);
        group.throughput(Throughput::Elements(*size as u64));

        for key in SortKey::ALL {
            group.bench_with_input(
                BenchmarkId::new(key.label(), size),
                &stories,
                |b, stories| {
                    b.iter(|| black_box(key.apply(black_box(stories))));
                },
            );
        }
    }

    group.finish();
}

fn bench_render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");

    for size in [10, 100, 1000].iter() {
        let stories = generate_stories(*size);
        let mut presenter = TablePresenter::new();
        presenter.select_sort(SortKey::Point);

        group.bench_with_input(BenchmarkId::from_parameter(size), &stories, |b, stories| {
            let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
            let mut hits = HitAreaRegistry::new();
            b.iter(|| {
                hits.clear();
                terminal
                    .draw(|f| {
                        let area = f.area();
                        render_table(f, area, &presenter, black_box(stories), &mut hits);
                    })
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_render_table);
criterion_main!(benches);
