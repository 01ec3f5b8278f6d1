//! Container width to column count.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use crate::consts::{MAX_COLUMNS, MULTI_COLUMN_SCALE_THRESHOLD};

/// Number of columns the grid should render.
///
/// `container_width` is `None` while the container is not mounted. List mode,
/// an unmounted container, and any width that is not a positive finite number
/// all collapse to a single column. Otherwise the width is measured in units of
/// `min_viewport_width`; the grid goes multi-column only once that ratio
/// reaches [`MULTI_COLUMN_SCALE_THRESHOLD`] and then rounds up, capped at
/// [`MAX_COLUMNS`].
#[must_use]
pub fn column_count(container_width: Option<f64>, list_mode: bool, min_viewport_width: f64) -> usize {
    if list_mode {
        return 1;
    }
    let Some(width) = container_width else {
        return 1;
    };
    if !width.is_finite() || width <= 0.0 || !min_viewport_width.is_finite() || min_viewport_width <= 0.0 {
        return 1;
    }

    let scale = width / min_viewport_width;
    if scale < MULTI_COLUMN_SCALE_THRESHOLD {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let columns = scale.ceil() as usize;
    columns.clamp(1, MAX_COLUMNS)
}
