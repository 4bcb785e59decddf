use std::cell::RefCell;
use std::collections::HashMap;

pub const DARK_MODE_KEY: &str = "darkMode";
/// The only value ever written under the dark-mode key.
pub const DARK_MODE_ENABLED: &str = "enabled";

/// Durable per-origin key-value storage.
///
/// Implementations swallow storage failures: a preference that cannot be
/// read is treated as absent, one that cannot be written is dropped.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-memory store, used when the browser denies storage access and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// The persisted dark-mode flag: present as `enabled`, or absent.
#[derive(Debug, Clone)]
pub struct DarkModePreference {
    key: String,
}

impl Default for DarkModePreference {
    fn default() -> Self {
        Self::new(DARK_MODE_KEY)
    }
}

impl DarkModePreference {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn load(&self, store: &dyn PreferenceStore) -> bool {
        store.get_item(&self.key).as_deref() == Some(DARK_MODE_ENABLED)
    }

    pub fn enable(&self, store: &dyn PreferenceStore) {
        log::debug!("dark mode enabled ({})", self.key);
        store.set_item(&self.key, DARK_MODE_ENABLED);
    }

    pub fn disable(&self, store: &dyn PreferenceStore) {
        log::debug!("dark mode disabled ({})", self.key);
        store.remove_item(&self.key);
    }

    pub fn set(&self, store: &dyn PreferenceStore, enabled: bool) {
        if enabled {
            self.enable(store);
        } else {
            self.disable(store);
        }
    }
}
