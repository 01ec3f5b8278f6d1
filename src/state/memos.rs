//! Memo list state fed by the remote memo service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetching and mutating memos is handled by the API layer; this module only
//! keeps the ordered list the home page hands to the masonry grid.

#[cfg(test)]
#[path = "memos_test.rs"]
mod memos_test;

use masonry::item::MasonryItem;

/// A memo as rendered in the list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Memo {
    /// Resource name, e.g. `memos/abc123`. Stable across edits.
    pub name: String,
    /// Display timestamp in milliseconds since the Unix epoch.
    pub display_time: i64,
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}

impl MasonryItem for Memo {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }

    fn revision(&self) -> i64 {
        self.display_time
    }
}

/// Shared memo list state.
#[derive(Clone, Debug, Default)]
pub struct MemosState {
    pub items: Vec<Memo>,
    pub error: Option<String>,
}

impl MemosState {
    /// Insert `memo`, or replace the memo with the same name.
    pub fn upsert(&mut self, memo: Memo) {
        match self.items.iter_mut().find(|m| m.name == memo.name) {
            Some(existing) => *existing = memo,
            None => self.items.push(memo),
        }
    }

    /// Remove the memo named `name`. Returns whether one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.name != name);
        self.items.len() != before
    }

    /// Memos in display order: pinned first, then newest first.
    #[must_use]
    pub fn ordered(&self) -> Vec<Memo> {
        let mut ordered = self.items.clone();
        ordered.sort_by(|a, b| b.pinned.cmp(&a.pinned).then(b.display_time.cmp(&a.display_time)));
        ordered
    }
}
