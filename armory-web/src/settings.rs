//! Browser-backed settings store.
//!
//! Settings live in `localStorage` as one JSON document. Reads are served
//! from an in-memory copy loaded at startup; writes update the copy and
//! persist it, logging any storage failure.

use armory_core::{Setting, Settings, SettingsStore};
use std::cell::RefCell;
use thiserror::Error;

pub const STORAGE_KEY: &str = "armory.settings";

#[derive(Debug, Error)]
pub enum WebStorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("settings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct LocalSettings {
    current: RefCell<Settings>,
}

impl LocalSettings {
    /// Load saved settings, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let settings = match read_saved() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(err) => {
                log::warn!("Using default settings: {err}");
                Settings::default()
            }
        };
        Self::with_settings(settings)
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            current: RefCell::new(settings),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Settings {
        self.current.borrow().clone()
    }
}

impl SettingsStore for LocalSettings {
    fn get_setting(&self, key: Setting) -> bool {
        self.current.borrow().get(key)
    }

    fn set_setting(&self, key: Setting, value: bool) {
        let snapshot = {
            let mut current = self.current.borrow_mut();
            current.set(key, value);
            current.clone()
        };
        if let Err(err) = persist(&snapshot) {
            log::warn!("Failed to save setting {}: {err}", key.key());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_saved() -> Result<Option<Settings>, WebStorageError> {
    let storage = crate::dom::local_storage()
        .map_err(|err| WebStorageError::Unavailable(crate::dom::js_error_message(&err)))?;
    let raw = storage
        .get_item(STORAGE_KEY)
        .map_err(|err| WebStorageError::Unavailable(crate::dom::js_error_message(&err)))?;
    raw.map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(WebStorageError::from)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unnecessary_wraps)]
fn read_saved() -> Result<Option<Settings>, WebStorageError> {
    Ok(None)
}

#[cfg(target_arch = "wasm32")]
fn persist(settings: &Settings) -> Result<(), WebStorageError> {
    let json = serde_json::to_string(settings)?;
    let storage = crate::dom::local_storage()
        .map_err(|err| WebStorageError::Unavailable(crate::dom::js_error_message(&err)))?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|err| WebStorageError::Write(crate::dom::js_error_message(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(settings: &Settings) -> Result<(), WebStorageError> {
    serde_json::to_string(settings)?;
    Ok(())
}
