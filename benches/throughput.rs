use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use condrule::parse::{tokenize, NullSink};
use condrule::{RuleSet, Validator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const ACTIONS: [&str; 8] = [
    "enable", "disable", "show", "hide", "select", "unselect", "check", "uncheck",
];

fn build_document(n: usize) -> (Validator, String) {
    let mut lines = Vec::with_capacity(n);
    for i in 0..n {
        let action = ACTIONS[i % ACTIONS.len()];
        lines.push(format!(
            "{action} if (f{i} == enabled | f{j} >= {i}) & f{k} != checked;",
            j = i + 1,
            k = i + 2
        ));
    }
    let validator = Validator::new((0..n + 2).map(|i| format!("f{i}")));
    (validator, lines.join("\n"))
}

fn bench_single(c: &mut Criterion) {
    let (validator, document) = build_document(20);

    c.bench_function("tokenize_document", |b| {
        b.iter(|| tokenize(black_box(&document)).len());
    });
    c.bench_function("validate_document", |b| {
        b.iter(|| validator.validate(black_box(&document)).is_ok());
    });
    c.bench_function("compile_document", |b| {
        b.iter(|| RuleSet::from_document_with(black_box(&document), &mut NullSink).len());
    });
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let (validator, document) = build_document(20);
        let validator = Arc::new(validator);
        let document: Arc<str> = document.into();

        group.bench_function(format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let v = Arc::clone(&validator);
                        let doc = Arc::clone(&document);
                        thread::spawn(move || {
                            let start = Instant::now();
                            for _ in 0..per_thread {
                                let _ = v.load(&doc);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                let mut max_elapsed = Duration::ZERO;
                for h in handles {
                    let elapsed = h.join().unwrap();
                    if elapsed > max_elapsed {
                        max_elapsed = elapsed;
                    }
                }
                max_elapsed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_throughput);
criterion_main!(benches);
