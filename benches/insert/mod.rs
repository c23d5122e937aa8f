use avlbst::{AvlTree, BinarySearchTree};
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::{per_tree, Lfsr};

#[derive(Debug, Clone, Copy)]
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
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        insert_avl(&mut g, n_values);
        insert_bst(&mut g, n_values);
    }
}

per_tree!(insert, avl => AvlTree<u16>, bst => BinarySearchTree<u16>);

/// Measure the time needed to insert `n_values` number of randomly generated
/// values into an empty tree.
fn insert<M, T>(g: &mut BenchmarkGroup<'_, M>, tree: &'static str, n_values: usize)
where
    M: Measurement,
    T: Default + Extend<u16>,
{
    let bench_name = BenchName { tree, n_values };
    g.throughput(Throughput::Elements(n_values as _)); // Values inserted per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || (T::default(), Lfsr::default()),
            |(mut t, mut rand)| {
                t.extend((0..n_values).map(|_| rand.next()));
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
