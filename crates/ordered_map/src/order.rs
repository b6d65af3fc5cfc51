//! Key ordering strategies

use std::cmp::Ordering;
use std::fmt;

/// Decides how two keys of an [`OrderedMap`](crate::OrderedMap) compare.
///
/// The map only ever looks at keys through this trait: two keys comparing
/// `Equal` are the same key, and iteration follows `Less` to `Greater`.
/// Implementations must be a total order, otherwise lookups may miss entries.
pub trait KeyOrder<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys with a caller-supplied comparison function.
///
/// ```rust
/// use ordered_map::{OrderBy, OrderedMap};
///
/// let mut by_len = OrderedMap::with_order(OrderBy(|a: &String, b: &String| a.len().cmp(&b.len())));
/// by_len.put("ccc".to_string(), 3).unwrap();
/// by_len.put("a".to_string(), 1).unwrap();
/// assert_eq!(by_len.keys().next().map(String::as_str), Some("a"));
/// ```
#[derive(Clone, Copy)]
pub struct OrderBy<F>(pub F);

impl<K: ?Sized, F> KeyOrder<K> for OrderBy<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for OrderBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderBy(..)")
    }
}

/// Inverts another ordering, so iteration runs from largest to smallest key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<K: ?Sized, O: KeyOrder<K>> KeyOrder<K> for Reversed<O> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}
