use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skillmatch_core::filter::{filter_resources, FacetOptions, FilterState};
use skillmatch_core::model::{Level, Resource};

fn make_catalog(n: usize) -> Vec<Resource> {
    (0..n)
        .map(|i| Resource {
            id: i.to_string(),
            title: format!("Resource number {i}"),
            provider: "Bench".into(),
            kind: ["Course", "Workshop", "Bootcamp"][i % 3].into(),
            level: Level::ALL[i % 3],
            duration: "1 hour".into(),
            rating: 4.5,
            url: format!("https://example.com/{i}"),
            tags: vec![format!("tag-{}", i % 40), "Python".into(), "Data".into()],
            description: "A resource used for benchmarking the filter.".into(),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_resources");
    let catalog = make_catalog(1000);

    group.bench_function("empty filter", |b| {
        let filter = FilterState::new();
        b.iter(|| filter_resources(black_box(&catalog), black_box(&filter)))
    });

    group.bench_function("search term", |b| {
        let mut filter = FilterState::new();
        filter.set_search("number 99");
        b.iter(|| filter_resources(black_box(&catalog), black_box(&filter)))
    });

    group.bench_function("all facets", |b| {
        let mut filter = FilterState::new();
        filter.set_search("resource");
        filter.toggle_type("Course");
        filter.toggle_level(Level::Beginner);
        filter.toggle_tag("tag-1");
        filter.toggle_tag("python");
        b.iter(|| filter_resources(black_box(&catalog), black_box(&filter)))
    });

    group.finish();
}

fn bench_facets(c: &mut Criterion) {
    let catalog = make_catalog(1000);
    c.bench_function("facet_options", |b| {
        b.iter(|| FacetOptions::from_resources(black_box(&catalog), 12))
    });
}

criterion_group!(benches, bench_filter, bench_facets);
criterion_main!(benches);
