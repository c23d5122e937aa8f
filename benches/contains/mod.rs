use avlbst::{AvlTree, BinarySearchTree};
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::{per_tree, Lfsr};

/// Lookups performed against a tree of `n_values`.
const N_LOOKUPS: usize = 100;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    tree: &'static str,
    bench: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/{}_n_values", v.tree, v.bench), v.n_values)
    }
}

/// The lookup surface shared by both trees.
trait Lookup: FromIterator<u16> {
    fn lookup(&self, v: &u16) -> bool;
}

impl Lookup for AvlTree<u16> {
    fn lookup(&self, v: &u16) -> bool {
        self.contains(v)
    }
}

impl Lookup for BinarySearchTree<u16> {
    fn lookup(&self, v: &u16) -> bool {
        self.contains(v)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("contains");

    for n_values in [1_000, 10_000] {
        contains_avl(&mut g, n_values);
        contains_bst(&mut g, n_values);
    }
}

per_tree!(contains, avl => AvlTree<u16>, bst => BinarySearchTree<u16>);

/// For a tree containing `n_values`, perform two benchmarks that each perform
/// [`N_LOOKUPS`], one run causing all hits, one run causing all misses.
fn contains<M, T>(g: &mut BenchmarkGroup<'_, M>, tree: &'static str, n_values: usize)
where
    M: Measurement,
    T: Lookup,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let t = (0..n_values).map(|_| rand.next()).collect::<T>();

    // Perform a benchmark that continues using the LFSR to generate values
    // that do not exist in the tree.
    let bench_name = BenchName {
        tree,
        bench: "misses",
        n_values,
    };
    g.throughput(Throughput::Elements(N_LOOKUPS as _)); // Lookups per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            // Provide the LFSR state after inserting n_values.
            || rand.clone(),
            |mut rand| {
                let mut any_hit = false;
                for _ in 0..N_LOOKUPS {
                    any_hit |= t.lookup(&rand.next());
                }
                assert!(!any_hit)
            },
            BatchSize::SmallInput,
        )
    });

    // Perform a benchmark that re-visits the inserted values.
    let bench_name = BenchName {
        tree,
        bench: "hits",
        n_values,
    };
    g.throughput(Throughput::Elements(N_LOOKUPS as _));
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            // Reset the LFSR.
            //
            // It will now generate the same sequence of values as what was
            // inserted into the tree originally.
            Lfsr::default,
            |mut rand| {
                let mut all_hit = true;
                for _ in 0..N_LOOKUPS {
                    all_hit &= t.lookup(&rand.next());
                }
                assert!(all_hit);
            },
            BatchSize::SmallInput,
        )
    });
}
