use proptest::prelude::*;

/// The number of distinct values generated by [`arbitrary_value()`], and the
/// upper bound for generated collection sizes.
pub(crate) const N_VALUES: usize = 50;

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Insert(usize),
    Search(usize),
    Delete(usize),
}

/// Generate arbitrary values in the range [0..[`N_VALUES`]).
///
/// A small value domain encourages multiple operations to act on the same
/// value.
pub(crate) fn arbitrary_value() -> impl Strategy<Value = usize> {
    0..N_VALUES
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_value().prop_map(Op::Insert),
        arbitrary_value().prop_map(Op::Search),
        arbitrary_value().prop_map(Op::Delete),
    ]
}
