//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`memos` for list data, `view` for presentation
//! toggles) so components depend on small focused models.

pub mod memos;
pub mod view;
