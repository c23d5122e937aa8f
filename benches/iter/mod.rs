use std::hint::black_box;

use avlbst::{AvlTree, BinarySearchTree};
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::{per_tree, Lfsr};

#[derive(Debug)]
struct BenchName {
    tree: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.tree), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        iter_avl(&mut g, n_values);
        iter_bst(&mut g, n_values);
    }
}

per_tree!(iter, avl => AvlTree<u16>, bst => BinarySearchTree<u16>);

/// Measure a full in-order walk of a tree holding `n_values`.
fn iter<M, T>(g: &mut BenchmarkGroup<'_, M>, tree: &'static str, n_values: usize)
where
    M: Measurement,
    T: FromIterator<u16>,
    for<'a> &'a T: IntoIterator<Item = &'a u16>,
{
    let mut rand = Lfsr::default();
    let t = (0..n_values).map(|_| rand.next()).collect::<T>();

    let bench_name = BenchName { tree, n_values };

    g.throughput(Throughput::Elements(n_values as _)); // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in &t {
                black_box(v);
            }
        })
    });
}
