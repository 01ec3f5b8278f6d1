//! Layout state machine for one rendered masonry list.
//!
//! ARCHITECTURE
//! ============
//! The coordinator owns the column count, the height map and the published
//! [`Distribution`]. The host feeds it three kinds of events:
//!
//! - container resizes and list-mode toggles, which may change the column
//!   count and then re-pack synchronously;
//! - item list replacements, which always re-pack synchronously so the grid
//!   never references removed items;
//! - height reports from mounted cards, which are debounced.
//!
//! Height reports move the machine from `Idle` to `Pending` by arming a timer
//! through the [`Scheduler`]. Re-arming replaces the previous handle, and the
//! dropped handle cancels its timer, so at most one timer is ever live. When
//! the host's timer callback calls [`LayoutCoordinator::settle`] the grid is
//! re-packed once from whatever heights are current at that moment.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use crate::columns::column_count;
use crate::config::MasonryConfig;
use crate::distribute::{Distribution, distribute};
use crate::heights::HeightMap;
use crate::item::MasonryItem;
use crate::schedule::Scheduler;

/// Debounce state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutState {
    /// No redistribution is waiting.
    #[default]
    Idle,
    /// A debounce timer is armed.
    Pending,
}

/// What an event did to the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutChange {
    /// Nothing to publish.
    Unchanged,
    /// A debounced redistribution is armed; nothing to publish yet.
    Scheduled,
    /// A new distribution is ready to publish.
    Redistributed,
}

#[derive(Clone, Copy, Debug)]
enum Trigger {
    Columns,
    Items,
    Heights,
}

/// Owns layout state for one masonry list.
pub struct LayoutCoordinator<T: MasonryItem, S: Scheduler> {
    config: MasonryConfig,
    scheduler: S,
    items: Vec<T>,
    heights: HeightMap<T::Key>,
    prefix_height: u32,
    list_mode: bool,
    container_width: Option<f64>,
    column_count: usize,
    distribution: Distribution,
    pending: Option<S::Handle>,
    generation: u64,
    torn_down: bool,
}

impl<T: MasonryItem, S: Scheduler> LayoutCoordinator<T, S> {
    /// Empty single-column layout.
    pub fn new(config: MasonryConfig, scheduler: S) -> Self {
        Self {
            config,
            scheduler,
            items: Vec::new(),
            heights: HeightMap::new(),
            prefix_height: 0,
            list_mode: false,
            container_width: None,
            column_count: 1,
            distribution: Distribution::empty(1),
            pending: None,
            generation: 0,
            torn_down: false,
        }
    }

    // --- Events ---

    /// The container was measured at `container_width` (`None` when unmounted).
    pub fn resize(&mut self, container_width: Option<f64>) -> LayoutChange {
        self.container_width = container_width;
        self.apply_column_count()
    }

    /// Force (or release) single-column list mode.
    pub fn set_list_mode(&mut self, list_mode: bool) -> LayoutChange {
        if self.list_mode == list_mode {
            return LayoutChange::Unchanged;
        }
        self.list_mode = list_mode;
        self.apply_column_count()
    }

    /// Replace the item list and re-pack immediately.
    pub fn set_items(&mut self, items: Vec<T>) -> LayoutChange {
        self.items = items;
        self.redistribute(Trigger::Items)
    }

    /// A mounted card under `key` now renders `height` pixels tall.
    pub fn report_height(&mut self, key: T::Key, height: u32) -> LayoutChange {
        log::trace!("masonry height report {key:?} = {height}px");
        if !self.heights.record(key, height) {
            return LayoutChange::Unchanged;
        }
        self.arm()
    }

    /// The prefix element now renders `height` pixels tall.
    pub fn report_prefix_height(&mut self, height: u32) -> LayoutChange {
        if self.prefix_height == height {
            return LayoutChange::Unchanged;
        }
        self.prefix_height = height;
        self.arm()
    }

    /// The debounce timer fired.
    ///
    /// A call with no armed timer is stale (the timer was superseded by a
    /// synchronous redistribution) and does nothing.
    pub fn settle(&mut self) -> LayoutChange {
        if self.pending.take().is_none() {
            return LayoutChange::Unchanged;
        }
        self.redistribute(Trigger::Heights)
    }

    /// Cancel any armed timer and stop arming new ones.
    pub fn teardown(&mut self) {
        self.pending.take();
        self.torn_down = true;
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> LayoutState {
        if self.pending.is_some() { LayoutState::Pending } else { LayoutState::Idle }
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub fn list_mode(&self) -> bool {
        self.list_mode
    }

    /// Most recently published distribution.
    #[must_use]
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Items assigned to `column`, top to bottom, with their list indices.
    pub fn column_items(&self, column: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.distribution
            .column(column)
            .iter()
            .filter_map(|&index| self.items.get(index).map(|item| (index, item)))
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn heights(&self) -> &HeightMap<T::Key> {
        &self.heights
    }

    #[must_use]
    pub fn prefix_height(&self) -> u32 {
        self.prefix_height
    }

    /// Number of redistributions performed so far. Diagnostic; also carried
    /// in the redistribution log line.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    /// Whether [`Self::teardown`] has run. Diagnostic.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // --- Internals ---

    fn apply_column_count(&mut self) -> LayoutChange {
        let next = column_count(self.container_width, self.list_mode, self.config.min_viewport_width);
        if next == self.column_count {
            return LayoutChange::Unchanged;
        }
        log::debug!("masonry columns {} -> {next}", self.column_count);
        self.column_count = next;
        self.redistribute(Trigger::Columns)
    }

    fn arm(&mut self) -> LayoutChange {
        if self.torn_down {
            return LayoutChange::Unchanged;
        }
        // Replacing the handle drops (and cancels) the previous timer.
        self.pending = Some(self.scheduler.schedule(self.config.redistribution_debounce_ms));
        LayoutChange::Scheduled
    }

    fn redistribute(&mut self, trigger: Trigger) -> LayoutChange {
        // A full re-pack already reflects every recorded height.
        self.pending.take();
        self.distribution = distribute(&self.items, self.column_count, &self.heights, self.prefix_height);
        self.generation += 1;
        log::debug!(
            "masonry redistributed ({trigger:?}): {} items over {} columns, generation {}",
            self.items.len(),
            self.column_count,
            self.generation
        );
        LayoutChange::Redistributed
    }
}
