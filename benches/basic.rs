//! Baseline comparisons against the std containers.
//!
//! These exist to make the documented complexity claims observable, not to
//! win them: `Vec` and `slice::sort` are expected to dominate.

use core::hint;

use criterion::{criterion_group, criterion_main, Criterion};
use lineal::{DynArray, LinkedList, Queue};
use rand::Rng;

const PUSH_COUNT: usize = 10_000;
const SORT_SIZE: usize = 2_000;
const QUADRATIC_SORT_SIZE: usize = 512;

/// Generate an array of random content of a specified length.
///
/// Random data keeps the compiler from specializing on a known input and
/// quicksort away from its deterministic-pivot worst case.
#[inline(never)]
fn gen_rand(len: usize) -> Vec<u64> {
    let mut rng = rand::rng();
    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(rng.random_range(0..u64::MAX));
    }
    vec
}

fn bench_push(c: &mut Criterion) {
    c.bench_function("dynarray_push", |b| {
        b.iter(|| {
            let mut arr: DynArray<u64> = DynArray::new();
            for i in 0..PUSH_COUNT as u64 {
                arr.push(hint::black_box(i));
            }
            arr
        })
    });

    c.bench_function("vec_push", |b| {
        b.iter(|| {
            let mut vec: Vec<u64> = Vec::new();
            for i in 0..PUSH_COUNT as u64 {
                vec.push(hint::black_box(i));
            }
            vec
        })
    });
}

fn bench_front_insert(c: &mut Criterion) {
    // Worst case for a contiguous buffer: every insert shifts the whole
    // tail right.
    c.bench_function("dynarray_front_insert", |b| {
        b.iter(|| {
            let mut arr: DynArray<u64> = DynArray::new();
            for i in 0..1_000u64 {
                arr.insert(0, hint::black_box(i)).unwrap();
            }
            arr
        })
    });

    c.bench_function("list_push_front", |b| {
        b.iter(|| {
            let mut list: LinkedList<u64> = LinkedList::new();
            for i in 0..1_000u64 {
                list.push_front(hint::black_box(i));
            }
            list
        })
    });
}

fn bench_sorts(c: &mut Criterion) {
    let input = gen_rand(SORT_SIZE);
    c.bench_function("dynarray_quick_sort", |b| {
        b.iter(|| {
            let mut arr: DynArray<u64> = input.iter().copied().collect();
            arr.quick_sort();
            arr
        })
    });

    c.bench_function("slice_sort_unstable", |b| {
        b.iter(|| {
            let mut vec = input.clone();
            vec.sort_unstable();
            vec
        })
    });

    let small = gen_rand(QUADRATIC_SORT_SIZE);
    c.bench_function("dynarray_insertion_sort", |b| {
        b.iter(|| {
            let mut arr: DynArray<u64> = small.iter().copied().collect();
            arr.insertion_sort();
            arr
        })
    });

    c.bench_function("dynarray_bubble_sort", |b| {
        b.iter(|| {
            let mut arr: DynArray<u64> = small.iter().copied().collect();
            arr.bubble_sort();
            arr
        })
    });
}

fn bench_queue_churn(c: &mut Criterion) {
    // Dequeue is the array's front removal, so this is intentionally the
    // quadratic path.
    c.bench_function("queue_enqueue_dequeue", |b| {
        b.iter(|| {
            let mut queue: Queue<u64> = Queue::new();
            for i in 0..1_000u64 {
                queue.enqueue(hint::black_box(i));
            }
            while queue.dequeue().is_ok() {}
            queue
        })
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_front_insert,
    bench_sorts,
    bench_queue_churn
);
criterion_main!(benches);
