use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// A tree calls [`Comparator::compare()`] for every ordering decision it
/// makes, so the ordering must be consistent for all values ever inserted into
/// a single tree instance. An inconsistent ordering does not cause undefined
/// behaviour in the memory-safety sense, but the tree contents become
/// unspecified.
///
/// Any `Fn(&T, &T) -> Ordering` is a [`Comparator`]:
///
/// ```
/// use avlbst::AvlTree;
///
/// let mut t = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// t.extend([1, 2, 3]);
///
/// assert_eq!(t.in_order(), [&3, &2, &1]);
/// ```
pub trait Comparator<T> {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The default [`Comparator`], ordering values by their [`Ord`] impl.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&"a", &"b"), Ordering::Less);
    }

    #[test]
    fn test_closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());

        assert_eq!(by_len.compare(&"bananas", &"kiwi"), Ordering::Greater);
        assert_eq!(by_len.compare(&"pear", &"kiwi"), Ordering::Equal);
    }

    proptest! {
        /// The natural order comparator agrees with Ord::cmp and is
        /// antisymmetric.
        #[test]
        fn prop_natural_order_antisymmetric(a in any::<i64>(), b in any::<i64>()) {
            assert_eq!(NaturalOrder.compare(&a, &b), a.cmp(&b));
            assert_eq!(NaturalOrder.compare(&a, &b), NaturalOrder.compare(&b, &a).reverse());
        }
    }
}
