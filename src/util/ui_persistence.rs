//! Browser localStorage helpers for persisted view settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state and
//! components can persist settings without repeating web-sys glue. Under SSR
//! and in native tests every read misses and every write is a no-op.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use masonry::config::MasonryConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the list-mode toggle.
pub const LIST_MODE_KEY: &str = "memos.view.list_mode";

/// Storage key for masonry layout overrides.
pub const MASONRY_CONFIG_KEY: &str = "memos.masonry";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    load_raw(key).and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Masonry settings from storage, falling back to defaults.
#[must_use]
pub fn load_masonry_config() -> MasonryConfig {
    load_raw(MASONRY_CONFIG_KEY).map_or_else(MasonryConfig::default, |raw| masonry_config_from_raw(&raw))
}

/// Parse stored masonry settings, logging and falling back on bad input.
#[must_use]
pub fn masonry_config_from_raw(raw: &str) -> MasonryConfig {
    match MasonryConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring stored masonry settings: {e}");
            MasonryConfig::default()
        }
    }
}

fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
