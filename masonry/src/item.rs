//! Items the grid lays out.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque card with a stable identity.
///
/// The engine never looks inside an item. It only needs a key that survives
/// reordering (heights are remembered per key, not per index) and an optional
/// revision that forces the host to remount the card when it changes.
pub trait MasonryItem {
    type Key: Clone + Debug + Eq + Hash;

    /// Stable unique key for this item.
    fn key(&self) -> Self::Key;

    /// Display revision; a change remounts the rendered card.
    fn revision(&self) -> i64 {
        0
    }
}
