//! Criterion benchmarks comparing the two pre-order cursors.
//!
//! Every benchmark walks the full sequence of descendants, either forward from the front or backward from an unstarted cursor, over:
//! - wide trees, where most of the work is moving between siblings
//! - deep trees, where most of the work is pushing and popping levels
//! - balanced trees, somewhere in between

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kindling::{FrameStackCursor, IterStackCursor, Node, PreorderCursor};
use std::hint::black_box;

// ============================================================================
// Tree Builders
// ============================================================================

/// A root with `count` leaf children
fn wide(count: usize) -> Node<usize> {
    Node::with_children(0, (1..=count).map(Node::new))
}

/// A chain of `count` nodes below the root
fn deep(count: usize) -> Node<usize> {
    let mut tree = Node::new(count);
    for value in (0..count).rev() {
        tree = Node::new(value).with_child(tree);
    }
    tree
}

/// A complete tree with the specified fan-out and number of levels below the root
fn balanced(fan_out: usize, levels: usize) -> Node<usize> {
    if levels == 0 {
        return Node::new(0);
    }
    Node::with_children(levels, (0..fan_out).map(|_| balanced(fan_out, levels - 1)))
}

fn shapes() -> Vec<(&'static str, Node<usize>)> {
    vec![
        ("wide", wide(10_000)),
        ("deep", deep(2_000)),
        ("balanced", balanced(4, 6)),
    ]
}

fn count_descendants(tree: &Node<usize>) -> usize {
    tree.descendants().count()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");

    for (shape, tree) in shapes() {
        group.throughput(Throughput::Elements(count_descendants(&tree) as u64));

        group.bench_with_input(BenchmarkId::new("frame_stack", shape), &tree, |b, tree| {
            b.iter(|| {
                let mut sum = 0;
                for node in FrameStackCursor::new(tree).forward() {
                    sum += *node.value();
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("iter_stack", shape), &tree, |b, tree| {
            b.iter(|| {
                let mut sum = 0;
                for node in IterStackCursor::new(tree).forward() {
                    sum += *node.value();
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_backward(c: &mut Criterion) {
    let mut group = c.benchmark_group("backward");

    for (shape, tree) in shapes() {
        group.throughput(Throughput::Elements(count_descendants(&tree) as u64));

        group.bench_with_input(BenchmarkId::new("frame_stack", shape), &tree, |b, tree| {
            b.iter(|| {
                let mut sum = 0;
                for node in FrameStackCursor::new(tree).backward() {
                    sum += *node.value();
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("iter_stack", shape), &tree, |b, tree| {
            b.iter(|| {
                let mut sum = 0;
                for node in IterStackCursor::new(tree).backward() {
                    sum += *node.value();
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

/// Checks `has_next` before every step, the way a list cursor is usually driven
fn bench_checked_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_walk");
    let tree = balanced(4, 6);
    group.throughput(Throughput::Elements(count_descendants(&tree) as u64));

    group.bench_function("frame_stack", |b| {
        b.iter(|| {
            let mut cursor = FrameStackCursor::new(&tree);
            let mut steps = 0_usize;
            while cursor.has_next() {
                black_box(cursor.next().ok());
                steps += 1;
            }
            steps
        })
    });

    group.bench_function("iter_stack", |b| {
        b.iter(|| {
            let mut cursor = IterStackCursor::new(&tree);
            let mut steps = 0_usize;
            while cursor.has_next() {
                black_box(cursor.next().ok());
                steps += 1;
            }
            steps
        })
    });

    group.finish();
}

criterion_group!(benches, bench_forward, bench_backward, bench_checked_walk);
criterion_main!(benches);
