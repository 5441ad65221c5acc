//! Push, traverse and churn across the four containers.
//!
//! Run with: cargo bench --bench containers

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_linear::{DoublyLinkedList, ForwardList, LinearList, StaticList, Vector};

const COUNT: usize = 100_000;

fn push_all<L: LinearList<Item = u64>>(list: &mut L) {
    for i in 0..COUNT as u64 {
        black_box(list.push_back(i).unwrap());
    }
}

fn sum<L: LinearList<Item = u64>>(list: &L) -> u64 {
    list.elements().copied().sum()
}

// ============================================================================
// Push
// ============================================================================

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("vector", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            push_all(&mut v);
            v
        });
    });

    group.bench_function("doubly_linked", |b| {
        b.iter(|| {
            let mut list = DoublyLinkedList::new();
            push_all(&mut list);
            list
        });
    });

    group.bench_function("forward", |b| {
        b.iter(|| {
            let mut list = ForwardList::new();
            push_all(&mut list);
            list
        });
    });

    group.bench_function("static", |b| {
        b.iter(|| {
            let mut list = StaticList::new();
            push_all(&mut list);
            list
        });
    });

    group.finish();
}

// ============================================================================
// Traverse
// ============================================================================

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    group.throughput(Throughput::Elements(COUNT as u64));

    let vector: Vector<u64> = (0..COUNT as u64).collect();
    let doubly: DoublyLinkedList<u64> = (0..COUNT as u64).collect();
    let forward: ForwardList<u64> = (0..COUNT as u64).collect();
    let statik: StaticList<u64> = (0..COUNT as u64).collect();

    group.bench_function("vector", |b| b.iter(|| black_box(sum(&vector))));
    group.bench_function("doubly_linked", |b| b.iter(|| black_box(sum(&doubly))));
    group.bench_function("forward", |b| b.iter(|| black_box(sum(&forward))));
    group.bench_function("static", |b| b.iter(|| black_box(sum(&statik))));

    group.finish();
}

// ============================================================================
// Churn: pop front, push back
// ============================================================================

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    group.throughput(Throughput::Elements(COUNT as u64));

    // Free slots are reused, so steady state never allocates
    let mut doubly: DoublyLinkedList<u64> = (0..1024).collect();
    let mut forward: ForwardList<u64> = (0..1024).collect();
    let mut statik: StaticList<u64> = (0..1024).collect();

    group.bench_function("doubly_linked", |b| {
        b.iter(|| {
            for _ in 0..COUNT {
                let v = doubly.pop_front().unwrap();
                black_box(doubly.push_back(v).unwrap());
            }
        });
    });

    group.bench_function("forward", |b| {
        b.iter(|| {
            for _ in 0..COUNT {
                let v = forward.pop_front().unwrap();
                black_box(forward.push_back(v).unwrap());
            }
        });
    });

    group.bench_function("static", |b| {
        b.iter(|| {
            for _ in 0..COUNT {
                let v = statik.pop_front().unwrap();
                black_box(statik.push_back(v).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_back, bench_traverse, bench_churn);
criterion_main!(benches);
