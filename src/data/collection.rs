//! Keyed in-memory collection
//!
//! One `Collection` per entity type. Iteration follows insertion order,
//! which is the order "first encountered" queries observe.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

/// Insertion-ordered map from key to row
#[derive(Debug, Clone)]
pub struct Collection<K, V> {
    rows: IndexMap<K, V>,
}

impl<K, V> Collection<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.get_mut(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.contains_key(key)
    }

    /// Insert or replace a row
    ///
    /// Replacing keeps the row's original position.
    pub fn put(&mut self, key: K, value: V) {
        self.rows.insert(key, value);
    }

    /// Remove a row, keeping the relative order of the rest
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.shift_remove(key)
    }

    /// Rows in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.rows.values()
    }

    /// Remove every row matching `predicate`, returning how many were removed
    pub fn delete_where(&mut self, mut predicate: impl FnMut(&V) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, value| !predicate(value));
        before - self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<K, V> Default for Collection<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
