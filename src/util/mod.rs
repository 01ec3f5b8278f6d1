//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! resize observation) from page and component logic.

#[cfg(feature = "hydrate")]
pub mod dom_observer;
pub mod timeout;
pub mod ui_persistence;
