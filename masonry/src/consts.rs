//! Shared numeric constants for the masonry crate.

// ── Columns ─────────────────────────────────────────────────────

/// Container width in CSS pixels one column needs to be worth showing.
pub const MIN_VIEWPORT_WIDTH_PX: f64 = 512.0;

/// Width-to-minimum ratio at which the grid leaves single-column mode.
///
/// Sitting above 1.0 keeps the grid from flapping between one and two columns
/// while the container hovers around the minimum width.
pub const MULTI_COLUMN_SCALE_THRESHOLD: f64 = 1.2;

/// Smallest configurable minimum column width in CSS pixels.
pub const MIN_VIEWPORT_WIDTH_FLOOR_PX: f64 = 64.0;

/// Most columns the grid will ever render.
pub const MAX_COLUMNS: usize = 16;

// ── Redistribution ──────────────────────────────────────────────

/// Quiet period after the last height report before the grid is re-packed.
pub const REDISTRIBUTION_DEBOUNCE_MS: u32 = 100;

/// Upper bound accepted for a configured debounce delay.
pub const MAX_REDISTRIBUTION_DEBOUNCE_MS: u32 = 10_000;
