//! Presentation toggles for the memo list.
//!
//! DESIGN
//! ======
//! Kept apart from memo data so toggling list mode never touches the list
//! itself; the masonry grid reacts to the flag on its own.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::util::ui_persistence::{LIST_MODE_KEY, load_json, save_json};

/// View toggles for the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Force the memo grid into a single column.
    pub list_mode: bool,
}

impl ViewState {
    /// Restore toggles from the persisted settings store.
    #[must_use]
    pub fn load() -> Self {
        Self { list_mode: load_json::<bool>(LIST_MODE_KEY).unwrap_or(false) }
    }

    /// Flip list mode and persist the new value. Returns the new value.
    pub fn toggle_list_mode(&mut self) -> bool {
        self.list_mode = !self.list_mode;
        save_json(LIST_MODE_KEY, &self.list_mode);
        self.list_mode
    }
}
