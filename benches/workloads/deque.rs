use criterion::{black_box, Criterion, Throughput};
use ringheap::Deque;
use std::collections::VecDeque;

use super::OPS;

pub fn run(c: &mut Criterion) {
    bench_fifo(c);
    bench_lifo_front(c);
    bench_random_access(c);
}

fn bench_fifo(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_push_back_pop_front");
    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function("ringheap", |b| {
        b.iter(|| {
            let mut dq = Deque::new();
            for i in 0..OPS {
                dq.push_back(black_box(i));
            }
            while let Ok(x) = dq.pop_front() {
                black_box(x);
            }
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            let mut dq = VecDeque::new();
            for i in 0..OPS {
                dq.push_back(black_box(i));
            }
            while let Some(x) = dq.pop_front() {
                black_box(x);
            }
        });
    });

    group.finish();
}

fn bench_lifo_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_push_front_pop_front");
    group.throughput(Throughput::Elements(OPS as u64));

    group.bench_function("ringheap", |b| {
        b.iter(|| {
            let mut dq = Deque::new();
            for i in 0..OPS {
                dq.push_front(black_box(i));
            }
            while let Ok(x) = dq.pop_front() {
                black_box(x);
            }
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            let mut dq = VecDeque::new();
            for i in 0..OPS {
                dq.push_front(black_box(i));
            }
            while let Some(x) = dq.pop_front() {
                black_box(x);
            }
        });
    });

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_get");
    group.throughput(Throughput::Elements(OPS as u64));

    // Half pushed at each end so the live range wraps the buffer.
    let mut ours = Deque::new();
    let mut theirs = VecDeque::new();
    for i in 0..OPS {
        if i % 2 == 0 {
            ours.push_back(i);
            theirs.push_back(i);
        } else {
            ours.push_front(i);
            theirs.push_front(i);
        }
    }

    group.bench_function("ringheap", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for i in 0..OPS {
                if let Ok(x) = ours.get(black_box(i)) {
                    sum = sum.wrapping_add(*x);
                }
            }
            black_box(sum);
        });
    });

    group.bench_function("std", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for i in 0..OPS {
                if let Some(x) = theirs.get(black_box(i)) {
                    sum = sum.wrapping_add(*x);
                }
            }
            black_box(sum);
        });
    });

    group.finish();
}
