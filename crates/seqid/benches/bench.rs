use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use seqid::{
    AtomicSequenceGenerator, IdFormat, IdentifierIssuer, LockSequenceGenerator, SequenceGenerator,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks raw counter increments on one thread.
fn bench_generator<G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: SequenceGenerator,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.try_next_id().unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one shared generator hammered from several threads.
fn bench_generator_threaded<G>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) where
    G: SequenceGenerator,
{
    let mut group = c.benchmark_group(group_name);

    for threads in thread_counts() {
        group.throughput(Throughput::Elements((TOTAL_IDS * threads) as u64));

        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{threads}"), |b| {
            b.iter_custom(|iters| {
                let mut total = core::time::Duration::ZERO;

                for _ in 0..iters {
                    let generator = Arc::new(generator_factory());
                    let barrier = Arc::new(Barrier::new(threads + 1));

                    let start = scope(|s| {
                        for _ in 0..threads {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..TOTAL_IDS {
                                    black_box(generator.try_next_id().unwrap());
                                }
                            });
                        }
                        barrier.wait();
                        Instant::now()
                    });

                    total += start.elapsed();
                }

                total
            });
        });
    }

    group.finish();
}

/// Benchmarks formatted issuing, which includes the string allocation.
fn bench_issuer(c: &mut Criterion) {
    let mut group = c.benchmark_group("issuer/atomic");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    for (name, format) in [
        ("unpadded", IdFormat::default()),
        ("padded", IdFormat::default().with_width(12)),
    ] {
        group.bench_function(format!("{name}/elems/{TOTAL_IDS}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let issuer: IdentifierIssuer = IdentifierIssuer::with_format(format.clone());
                    for _ in 0..TOTAL_IDS {
                        black_box(issuer.next().unwrap());
                    }
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

fn thread_counts() -> Vec<usize> {
    let max = num_cpus::get().max(2);
    let mut counts = vec![2];
    while counts[counts.len() - 1] * 2 <= max {
        counts.push(counts[counts.len() - 1] * 2);
    }
    counts
}

fn benchmarks(c: &mut Criterion) {
    bench_generator(c, "mono/sequential/atomic", AtomicSequenceGenerator::new);
    bench_generator(c, "mono/sequential/lock", LockSequenceGenerator::new);

    bench_generator_threaded(c, "multi/contended/atomic", AtomicSequenceGenerator::new);
    bench_generator_threaded(c, "multi/contended/lock", LockSequenceGenerator::new);

    bench_issuer(c);
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
