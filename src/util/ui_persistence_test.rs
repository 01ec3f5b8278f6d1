#![cfg(not(feature = "hydrate"))]
#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn load_json_misses_without_browser_storage() {
    assert_eq!(load_json::<bool>(LIST_MODE_KEY), None);
}

#[test]
fn save_json_is_noop_but_callable() {
    save_json(LIST_MODE_KEY, &true);
    assert_eq!(load_json::<bool>(LIST_MODE_KEY), None);
}

#[test]
fn load_masonry_config_defaults_without_storage() {
    assert_eq!(load_masonry_config(), MasonryConfig::default());
}

#[test]
fn stored_config_overrides_are_applied() {
    let config = masonry_config_from_raw(r#"{"minViewportWidthForMultiColumn": 360}"#);
    assert_eq!(config.min_viewport_width, 360.0);
    assert_eq!(config.redistribution_debounce_ms, 100);
}

#[test]
fn invalid_stored_config_falls_back_to_defaults() {
    assert_eq!(masonry_config_from_raw(r#"{"minViewportWidthForMultiColumn": 0}"#), MasonryConfig::default());
    assert_eq!(masonry_config_from_raw("{"), MasonryConfig::default());
}
