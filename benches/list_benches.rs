use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linkwork::prelude::*;
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 512, 2_048];

fn random_values(len: usize, range: i32) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(0..range)).collect()
}

fn build(values: &[i32]) -> Vec<Node> {
    values.iter().copied().map(Node::new).collect()
}

// --- Duplicate removal: nested runner vs. seen set ---

fn dedupe_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_duplicates");

    for size in SIZES {
        // Few distinct values so both variants actually unlink nodes.
        let values = random_values(size, (size / 4) as i32);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("runner", size), |b| {
            b.iter_batched(
                || build(&values),
                |mut nodes| {
                    let mut list = unsafe { SinglyLinkedList::from_nodes(&mut nodes) };
                    black_box(list.remove_duplicates());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("seen_set", size), |b| {
            b.iter_batched(
                || build(&values),
                |mut nodes| {
                    let mut list = unsafe { SinglyLinkedList::from_nodes(&mut nodes) };
                    black_box(list.remove_duplicates_using_seen());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// --- K-th to last: known length, quadratic scan, recursion ---

fn kth_to_last_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("kth_to_last");

    for size in SIZES {
        let mut nodes = build(&random_values(size, i32::MAX));
        let list = unsafe { SinglyLinkedList::from_nodes(&mut nodes) };
        let k = size / 2;

        group.bench_function(BenchmarkId::new("with_len", size), |b| {
            b.iter(|| black_box(list.kth_to_last_with_len(black_box(k), size)));
        });
        group.bench_function(BenchmarkId::new("scan", size), |b| {
            b.iter(|| black_box(list.kth_to_last(black_box(k))));
        });
        group.bench_function(BenchmarkId::new("recursive", size), |b| {
            b.iter(|| black_box(list.kth_to_last_recursive(black_box(k))));
        });
    }

    group.finish();
}

// --- Loop detection on a list whose tail points back to the middle ---

fn loop_detection_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_loop");

    for size in SIZES {
        let mut nodes = build(&random_values(size, i32::MAX));
        let list = unsafe { SinglyLinkedList::from_nodes(&mut nodes) };
        let mut ptrs: Vec<_> = unsafe { list.iter() }.collect();
        let middle = ptrs[size / 2];
        unsafe { ptrs[size - 1].as_mut().set_next(Some(middle)) };

        group.bench_function(BenchmarkId::new("reference_set", size), |b| {
            b.iter(|| black_box(list.contains_loop()));
        });
        group.bench_function(BenchmarkId::new("flagged", size), |b| {
            b.iter(|| black_box(list.contains_loop_flagged()));
        });
        group.bench_function(BenchmarkId::new("floyd", size), |b| {
            b.iter(|| black_box(list.contains_loop_floyd()));
        });
    }

    group.finish();
}

// --- Merge point: all five algorithms on lists sharing the last quarter ---

fn merge_point_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_point");

    for size in SIZES {
        let mut shared = build(&random_values(size / 4, i32::MAX));
        let mut prefix1 = build(&random_values(size / 2, i32::MAX));
        let mut prefix2 = build(&random_values(size / 4, i32::MAX));

        let tail = unsafe { SinglyLinkedList::from_nodes(&mut shared) };
        let mut list1 = unsafe { SinglyLinkedList::from_nodes(&mut prefix1) };
        let mut list2 = unsafe { SinglyLinkedList::from_nodes(&mut prefix2) };
        if let Some(head) = tail.head() {
            list1.append(head);
            list2.append(head);
        }

        group.bench_function(BenchmarkId::new("brute_force", size), |b| {
            b.iter(|| black_box(merge_point_brute_force(&list1, &list2)));
        });
        group.bench_function(BenchmarkId::new("by_length", size), |b| {
            b.iter(|| black_box(merge_point_by_length(&list1, &list2)));
        });
        group.bench_function(BenchmarkId::new("flagged", size), |b| {
            b.iter(|| black_box(merge_point_flagged(&list1, &list2)));
        });
        group.bench_function(BenchmarkId::new("two_pointer", size), |b| {
            b.iter(|| black_box(merge_point_two_pointer(&list1, &list2)));
        });
        group.bench_function(BenchmarkId::new("cycle", size), |b| {
            b.iter(|| black_box(merge_point_cycle(&mut list1, &list2)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    dedupe_benchmark,
    kth_to_last_benchmark,
    loop_detection_benchmark,
    merge_point_benchmark
);
criterion_main!(benches);
