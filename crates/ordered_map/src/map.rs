//! Sorted, array-backed associative container

use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use crate::error::MapError;
use crate::order::{KeyOrder, NaturalOrder};

/// Slots allocated by a freshly created map
pub const INITIAL_CAPACITY: usize = 1;

/// Factor applied to the capacity whenever a full map needs one more slot
pub const GROWTH_FACTOR: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Associative container that keeps its entries sorted by key.
///
/// Entries live in a single contiguous buffer in ascending key order (as
/// decided by `O`). Lookups binary-search that buffer; insertions and removals
/// shift the tail of the buffer by one slot. When the buffer is full it grows
/// by [`GROWTH_FACTOR`], and allocation failure is reported as
/// [`MapError::OutOfMemory`] with the map left exactly as it was.
///
/// Keys and values are owned by the map. Cloning the map deep-copies both
/// through their `Clone` implementations; dropping it releases them.
pub struct OrderedMap<K, V, O = NaturalOrder> {
    entries: Vec<Entry<K, V>>,
    order: O,
}

impl<K: Ord, V> OrderedMap<K, V, NaturalOrder> {
    /// Create an empty map ordered by `K`'s `Ord` implementation.
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, O> OrderedMap<K, V, O>
where
    O: KeyOrder<K>,
{
    /// Create an empty map using a custom key ordering.
    pub fn with_order(order: O) -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            order,
        }
    }

    /// Index of `key` if present, otherwise the slot that keeps the buffer sorted.
    fn search(&self, key: &K) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| self.order.compare(&entry.key, key))
    }

    fn grow_if_full(&mut self) -> Result<(), MapError> {
        let capacity = self.entries.capacity();
        if self.entries.len() < capacity {
            return Ok(());
        }
        let additional = (capacity * (GROWTH_FACTOR - 1)).max(INITIAL_CAPACITY);
        self.entries
            .try_reserve_exact(additional)
            .map_err(|_| MapError::OutOfMemory)
    }

    /// Number of entries in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries the map can hold before it has to grow
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// The ordering this map was created with
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Whether an entry with a key equal to `key` exists.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    /// Borrow the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).ok().map(|index| &self.entries[index].value)
    }

    /// Mutably borrow the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.search(key) {
            Ok(index) => Some(&mut self.entries[index].value),
            Err(_) => None,
        }
    }

    /// Store `value` under `key`.
    ///
    /// If the key is already present only the value is replaced: the stored
    /// key stays as it was, the size is unchanged and the previous value is
    /// handed back. Otherwise the entry is inserted at its sorted position.
    ///
    /// # Errors
    /// [`MapError::OutOfMemory`] if the buffer had to grow and could not.
    /// The map is untouched in that case.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        match self.search(&key) {
            Ok(index) => Ok(Some(mem::replace(&mut self.entries[index].value, value))),
            Err(index) => {
                self.grow_if_full()?;
                self.entries.insert(index, Entry { key, value });
                Ok(None)
            }
        }
    }

    /// Remove the entry stored under `key` and return its value.
    pub fn remove(&mut self, key: &K) -> Result<V, MapError> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove the entry stored under `key` and return both the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Result<(K, V), MapError> {
        let index = self.search(key).map_err(|_| MapError::KeyNotFound)?;
        let entry = self.entries.remove(index);
        Ok((entry.key, entry.value))
    }

    /// Remove every entry, keeping the allocated buffer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Deep copy of the map.
    ///
    /// The copy is built in a fresh buffer of the same capacity; if that
    /// buffer cannot be allocated nothing is copied and the source is
    /// untouched.
    pub fn try_clone(&self) -> Result<Self, MapError>
    where
        K: Clone,
        V: Clone,
        O: Clone,
    {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(self.entries.capacity())
            .map_err(|_| MapError::OutOfMemory)?;
        entries.extend(self.entries.iter().cloned());
        Ok(Self {
            entries,
            order: self.order.clone(),
        })
    }

    /// Smallest key in the map
    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(|entry| &entry.key)
    }

    /// Largest key in the map
    pub fn last_key(&self) -> Option<&K> {
        self.entries.last().map(|entry| &entry.key)
    }

    /// Keys in ascending order.
    ///
    /// Every call starts a fresh, independent pass over the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.iter(),
        }
    }

    /// Mutable values in ascending key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.entries.iter_mut(),
        }
    }

    /// `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// `(key, mutable value)` pairs in ascending key order. Keys stay immutable
    /// so the ordering cannot be broken through this iterator.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }
}

impl<K, V, O> Clone for OrderedMap<K, V, O>
where
    K: Clone,
    V: Clone,
    O: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            order: self.order.clone(),
        }
    }
}

impl<K, V, O> PartialEq for OrderedMap<K, V, O>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq, O> Eq for OrderedMap<K, V, O> {}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for OrderedMap<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the keys of an [`OrderedMap`], smallest first.
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| &entry.key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`OrderedMap`], in key order.
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| &entry.value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Mutable iterator over the values of an [`OrderedMap`], in key order.
#[derive(Debug)]
pub struct ValuesMut<'a, K, V> {
    inner: slice::IterMut<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &mut entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// Iterator over `(key, value)` pairs of an [`OrderedMap`], smallest key first.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over `(key, mutable value)` pairs of an [`OrderedMap`].
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &mut entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over the entries of an [`OrderedMap`].
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K, V, O: KeyOrder<K>> IntoIterator for &'a OrderedMap<K, V, O> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, O: KeyOrder<K>> IntoIterator for &'a mut OrderedMap<K, V, O> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, O> IntoIterator for OrderedMap<K, V, O> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

#[cfg(test)]
#[path = "map_tests.rs"]
mod map_tests;
