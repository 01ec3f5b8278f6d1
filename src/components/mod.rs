//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the memo list surfaces while reading shared state from
//! Leptos context providers.

pub mod masonry_view;
pub mod memo_card;
