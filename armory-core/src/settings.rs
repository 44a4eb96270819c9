//! User settings shared across the app.
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    /// Show the expanded details section in the item popup
    ItemDetails,
}

impl Setting {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ItemDetails => "itemDetails",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub item_details: bool,
}

impl Settings {
    #[must_use]
    pub const fn get(&self, key: Setting) -> bool {
        match key {
            Setting::ItemDetails => self.item_details,
        }
    }

    pub const fn set(&mut self, key: Setting, value: bool) {
        match key {
            Setting::ItemDetails => self.item_details = value,
        }
    }
}

/// Persisted boolean settings.
///
/// Writes are fire-and-forget: a store that fails to persist logs the
/// failure itself.
pub trait SettingsStore {
    fn get_setting(&self, key: Setting) -> bool;
    fn set_setting(&self, key: Setting, value: bool);
}

impl<T: SettingsStore + ?Sized> SettingsStore for Rc<T> {
    fn get_setting(&self, key: Setting) -> bool {
        (**self).get_setting(key)
    }

    fn set_setting(&self, key: Setting, value: bool) {
        (**self).set_setting(key, value);
    }
}

/// In-memory settings used by tests and the tester.
#[derive(Debug, Default)]
pub struct MemorySettings {
    settings: RefCell<Settings>,
    writes: RefCell<usize>,
}

impl MemorySettings {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RefCell::new(settings),
            writes: RefCell::new(0),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Settings {
        self.settings.borrow().clone()
    }

    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl SettingsStore for MemorySettings {
    fn get_setting(&self, key: Setting) -> bool {
        self.settings.borrow().get(key)
    }

    fn set_setting(&self, key: Setting, value: bool) {
        self.settings.borrow_mut().set(key, value);
        *self.writes.borrow_mut() += 1;
    }
}
