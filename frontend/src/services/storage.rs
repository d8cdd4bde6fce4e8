//! Dark-mode preference persisted in localStorage.

use web_sys::Storage;

use super::PreferenceStore;
use crate::config::DARK_MODE_STORAGE_KEY;
use crate::types::{AppError, AppResult, Preference};

/// Get localStorage, if the browser lets us have it.
fn local_storage() -> AppResult<Storage> {
    gloo_utils::window()
        .local_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("localStorage not available".to_string()))
}

/// [`PreferenceStore`] backed by `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalPreferenceStore {
    key: String,
}

impl LocalPreferenceStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalPreferenceStore {
    fn default() -> Self {
        Self::new(DARK_MODE_STORAGE_KEY)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Option<String> {
        match local_storage() {
            Ok(storage) => storage.get_item(&self.key).ok().flatten(),
            Err(e) => {
                log::warn!("{} - assuming light mode", e);
                None
            }
        }
    }

    fn save(&self, preference: Preference) -> AppResult<()> {
        local_storage()?
            .set_item(&self.key, preference.as_str())
            .map_err(|e| AppError::Storage(format!("Failed to save preference: {:?}", e)))
    }
}
