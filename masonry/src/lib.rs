//! Adaptive masonry layout engine for the memo list.
//!
//! This crate owns the layout math behind the memo grid: how many columns fit
//! the container, which column each card lands in, and when a fresh layout
//! must be computed as card heights trickle in after mount. It has no browser
//! dependency. The host UI wires DOM resize observation and timers to the
//! capability traits in [`observe`] and [`schedule`], then renders whatever
//! [`distribute::Distribution`] the [`coordinator::LayoutCoordinator`]
//! publishes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`coordinator`] | `idle`/`pending` state machine owning layout state |
//! | [`distribute`] | Greedy shortest-column bin-packing |
//! | [`columns`] | Container width to column count |
//! | [`heights`] | Last known rendered height per item key |
//! | [`item`] | The [`item::MasonryItem`] trait implemented by laid-out items |
//! | [`observe`] | Resize observation capability and the per-item height reporter |
//! | [`schedule`] | Cancelable one-shot timer capability for the debounce |
//! | [`config`] | Tunables loaded from persisted settings |
//! | [`consts`] | Default widths, thresholds, and delays |

pub mod columns;
pub mod config;
pub mod consts;
pub mod coordinator;
pub mod distribute;
pub mod heights;
pub mod item;
pub mod observe;
pub mod schedule;
