use super::*;

const MIN: f64 = 512.0;

#[test]
fn list_mode_forces_single_column() {
    assert_eq!(column_count(Some(4096.0), true, MIN), 1);
}

#[test]
fn unmounted_container_is_single_column() {
    assert_eq!(column_count(None, false, MIN), 1);
}

#[test]
fn zero_width_is_single_column() {
    assert_eq!(column_count(Some(0.0), false, MIN), 1);
}

#[test]
fn negative_or_nan_width_is_single_column() {
    assert_eq!(column_count(Some(-800.0), false, MIN), 1);
    assert_eq!(column_count(Some(f64::NAN), false, MIN), 1);
    assert_eq!(column_count(Some(f64::INFINITY), false, MIN), 1);
}

#[test]
fn zero_minimum_width_never_divides() {
    assert_eq!(column_count(Some(1024.0), false, 0.0), 1);
}

#[test]
fn below_hysteresis_threshold_stays_single() {
    // 600 / 512 ≈ 1.17
    assert_eq!(column_count(Some(600.0), false, MIN), 1);
}

#[test]
fn just_above_threshold_goes_to_two_columns() {
    // 620 / 512 ≈ 1.21
    assert_eq!(column_count(Some(620.0), false, MIN), 2);
}

#[test]
fn exact_threshold_goes_multi_column() {
    assert_eq!(column_count(Some(512.0 * 1.2), false, MIN), 2);
}

#[test]
fn exact_multiple_does_not_round_up_further() {
    assert_eq!(column_count(Some(1536.0), false, MIN), 3);
}

#[test]
fn fractional_scale_rounds_up() {
    assert_eq!(column_count(Some(1100.0), false, MIN), 3);
    assert_eq!(column_count(Some(1024.0), false, MIN), 2);
}

#[test]
fn custom_minimum_width_changes_breakpoints() {
    assert_eq!(column_count(Some(600.0), false, 300.0), 2);
    assert_eq!(column_count(Some(350.0), false, 300.0), 1);
}

#[test]
fn column_count_is_capped() {
    use crate::consts::MAX_COLUMNS;
    assert_eq!(column_count(Some(1000.0), false, 1e-300), MAX_COLUMNS);
    assert_eq!(column_count(Some(f64::MAX), false, MIN), MAX_COLUMNS);
    assert_eq!(column_count(Some(512.0 * 16.0), false, MIN), 16);
}
