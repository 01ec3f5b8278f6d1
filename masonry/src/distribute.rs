//! Greedy shortest-column bin-packing.
//!
//! ALGORITHM
//! =========
//! Column 0 starts at the prefix height and always receives item 0, which
//! keeps the newest card directly under the editor that produced it. Every
//! later item goes to the column with the smallest running height, breaking
//! ties by the fewest cards assigned and then by the lowest column index.
//! Items with no reported height weigh zero: they still get a slot but do
//! not move the balance until their first measurement arrives.
//!
//! The result is always rebuilt from scratch. Inputs are tens to low hundreds
//! of cards and the cost is O(items × columns).

#[cfg(test)]
#[path = "distribute_test.rs"]
mod distribute_test;

use crate::consts::MAX_COLUMNS;
use crate::heights::HeightMap;
use crate::item::MasonryItem;

/// Column assignment for one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    /// Item-list indices per column, top to bottom.
    pub columns: Vec<Vec<usize>>,
    /// Cumulative pixel height per column, prefix included in column 0.
    pub column_heights: Vec<u64>,
}

impl Distribution {
    /// `column_count` empty columns (at least one).
    #[must_use]
    pub fn empty(column_count: usize) -> Self {
        let column_count = column_count.clamp(1, MAX_COLUMNS);
        Self { columns: vec![Vec::new(); column_count], column_heights: vec![0; column_count] }
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Indices assigned to `column`, empty when out of range.
    #[must_use]
    pub fn column(&self, column: usize) -> &[usize] {
        self.columns.get(column).map_or(&[], Vec::as_slice)
    }

    /// Column holding item-list index `index`. Linear scan; diagnostic only.
    #[must_use]
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns.iter().position(|column| column.contains(&index))
    }

    /// Number of assigned items across all columns.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

/// Assign every item in `items` to one of `column_count` columns.
///
/// A `column_count` of zero is treated as one; counts above [`MAX_COLUMNS`]
/// are capped.
#[must_use]
pub fn distribute<T: MasonryItem>(
    items: &[T],
    column_count: usize,
    heights: &HeightMap<T::Key>,
    prefix_height: u32,
) -> Distribution {
    let column_count = column_count.min(MAX_COLUMNS);
    let height_of = |item: &T| u64::from(heights.height_or_zero(&item.key()));

    if column_count <= 1 {
        let total = items.iter().map(height_of).sum::<u64>() + u64::from(prefix_height);
        return Distribution { columns: vec![(0..items.len()).collect()], column_heights: vec![total] };
    }

    let mut distribution = Distribution::empty(column_count);
    distribution.column_heights[0] = u64::from(prefix_height);

    let mut indexed = items.iter().enumerate();
    if let Some((index, first)) = indexed.next() {
        distribution.columns[0].push(index);
        distribution.column_heights[0] += height_of(first);
    }

    for (index, item) in indexed {
        let target = shortest_column(&distribution);
        distribution.columns[target].push(index);
        distribution.column_heights[target] += height_of(item);
    }

    distribution
}

/// Lowest height, then fewest items, then lowest index.
fn shortest_column(distribution: &Distribution) -> usize {
    let mut best = 0;
    let mut best_rank = (distribution.column_heights[0], distribution.columns[0].len());
    for (column, (&height, items)) in distribution
        .column_heights
        .iter()
        .zip(&distribution.columns)
        .enumerate()
        .skip(1)
    {
        let rank = (height, items.len());
        if rank < best_rank {
            best = column;
            best_rank = rank;
        }
    }
    best
}
