//! Last known rendered height per item key.

#[cfg(test)]
#[path = "heights_test.rs"]
mod heights_test;

use std::collections::HashMap;
use std::hash::Hash;

/// Rendered pixel heights keyed by item key.
///
/// Entries are created on first report and overwritten afterwards. They are
/// never removed: a key that drops out of the item list is simply not looked
/// up by the next distribution.
#[derive(Clone, Debug)]
pub struct HeightMap<K> {
    heights: HashMap<K, u32>,
}

impl<K> Default for HeightMap<K> {
    fn default() -> Self {
        Self { heights: HashMap::new() }
    }
}

impl<K: Eq + Hash> HeightMap<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded height for `key`, if any report has arrived yet.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<u32> {
        self.heights.get(key).copied()
    }

    /// Height used for balancing: unknown keys weigh nothing.
    #[must_use]
    pub fn height_or_zero(&self, key: &K) -> u32 {
        self.get(key).unwrap_or(0)
    }

    /// Store `height` for `key`. Returns `false` when it equals the stored value.
    pub fn record(&mut self, key: K, height: u32) -> bool {
        match self.heights.insert(key, height) {
            Some(previous) => previous != height,
            None => true,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

impl<K: Eq + Hash> FromIterator<(K, u32)> for HeightMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self { heights: iter.into_iter().collect() }
    }
}
