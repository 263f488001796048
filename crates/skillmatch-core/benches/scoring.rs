use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skillmatch_core::model::Question;
use skillmatch_core::scoring::{compute_scores, AnswerSet};

fn make_questions(n: usize, categories: usize) -> Vec<Question> {
    (0..n)
        .map(|i| Question {
            id: i as u32,
            text: format!("Question {i}"),
            options: (0..5).map(|o| format!("Option {o}")).collect(),
            category: format!("category-{}", i % categories),
        })
        .collect()
}

fn make_answers(n: usize) -> AnswerSet {
    (0..n).map(|i| (i, (i % 5) as u8)).collect()
}

fn bench_compute_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_scores");

    let builtin = skillmatch_core::parser::builtin_catalog().expect("builtin catalog");
    let full = AnswerSet::from_positional(&[4, 3, 2, 1, 0]);
    group.bench_function("builtin quiz", |b| {
        b.iter(|| compute_scores(black_box(&builtin.questions), black_box(&full)))
    });

    let questions = make_questions(100, 10);
    let answers = make_answers(100);
    group.bench_function("n=100,categories=10", |b| {
        b.iter(|| compute_scores(black_box(&questions), black_box(&answers)))
    });

    let questions = make_questions(1000, 50);
    let partial = make_answers(500);
    group.bench_function("n=1000,half answered", |b| {
        b.iter(|| compute_scores(black_box(&questions), black_box(&partial)))
    });

    group.finish();
}

criterion_group!(benches, bench_compute_scores);
criterion_main!(benches);
