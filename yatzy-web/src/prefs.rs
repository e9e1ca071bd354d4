//! Preference storage.
//!
//! The UI reads and writes user preferences (currently only the locale)
//! through a [`PreferenceStore`] installed per thread. The browser build uses
//! `localStorage`; host builds and tests use an in-memory map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage key for the chosen locale code.
pub const LOCALE_KEY: &str = "yatzy.locale";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("storage error: {0}")]
    Storage(String),
}

/// Key/value store for user preferences.
pub trait PreferenceStore {
    /// Read a stored preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Persist a preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// `localStorage`-backed preferences.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrefs;

impl PreferenceStore for BrowserPrefs {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage()
                .map_err(|err| PreferenceError::Storage(crate::dom::js_error_message(&err)))?;
            storage
                .get_item(key)
                .map_err(|err| PreferenceError::Storage(crate::dom::js_error_message(&err)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(PreferenceError::Unavailable)
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = crate::dom::local_storage()
                .map_err(|err| PreferenceError::Storage(crate::dom::js_error_message(&err)))?;
            storage
                .set_item(key, value)
                .map_err(|err| PreferenceError::Storage(crate::dom::js_error_message(&err)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(PreferenceError::Unavailable)
        }
    }
}

/// In-memory preferences. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn platform_default() -> Box<dyn PreferenceStore> {
    if cfg!(all(not(test), target_arch = "wasm32")) {
        Box::new(BrowserPrefs)
    } else {
        Box::new(MemoryPrefs::new())
    }
}

thread_local! {
    static PREFS: RefCell<Box<dyn PreferenceStore>> = RefCell::new(platform_default());
}

/// Replace the preference store for this thread.
pub fn install(store: impl PreferenceStore + 'static) {
    PREFS.with(|cell| cell.replace(Box::new(store)));
}

/// Saved locale code, if any. Storage failures are logged and read as unset.
#[must_use]
pub fn saved_locale() -> Option<String> {
    PREFS.with(|cell| match cell.borrow().load(LOCALE_KEY) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("could not read locale preference: {err}");
            None
        }
    })
}

/// Remember the locale for the next visit.
pub fn save_locale(code: &str) {
    PREFS.with(|cell| {
        if let Err(err) = cell.borrow().save(LOCALE_KEY, code) {
            log::warn!("could not persist locale preference: {err}");
        }
    });
}
