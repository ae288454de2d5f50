//! Benchmark the per-step cost of each replacement policy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use pagesim::{PageRef, PolicyKind, SimulationSession, TimeSettings};

/// A mildly skewed synthetic reference stream: enough reuse to exercise
/// the hit paths, enough churn to keep the eviction scans busy.
fn reference_stream(len: u32, distinct: u32) -> Vec<PageRef> {
    (0..len)
        .map(|i| PageRef::new((i * 7 + i % 13) % distinct))
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let times = TimeSettings::default();
    let refs = reference_stream(1024, 64);

    let mut group = c.benchmark_group("advance_1024_refs");
    for kind in PolicyKind::ALL {
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| {
                let mut session = SimulationSession::new(kind, 8, true).unwrap();
                for (idx, &page) in refs.iter().enumerate() {
                    let _ = session
                        .advance(black_box(page), &times, &refs[idx + 1..])
                        .unwrap();
                }
                session.faults()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
