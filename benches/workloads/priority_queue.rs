use criterion::{black_box, Criterion, Throughput};
use ringheap::PriorityQueue;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::OPS;

pub fn run(c: &mut Criterion) {
    bench_push(c);
    bench_push_pop(c);
}

// Scrambled but deterministic input.
fn key(i: usize) -> u64 {
    (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 16
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue_push");
    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function("ringheap", |b| {
        b.iter(|| {
            let mut heap = PriorityQueue::min_heap();
            for i in 0..OPS {
                heap.push(black_box(key(i)));
            }
            black_box(heap.len());
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..OPS {
                heap.push(Reverse(black_box(key(i))));
            }
            black_box(heap.len());
        });
    });

    group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_queue_push_pop");
    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function("ringheap", |b| {
        b.iter(|| {
            let mut heap = PriorityQueue::new(|x: &u64, y: &u64| x < y);
            for i in 0..OPS {
                heap.push(key(i));
            }
            while let Ok(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..OPS {
                heap.push(Reverse(key(i)));
            }
            while let Some(Reverse(x)) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.finish();
}
