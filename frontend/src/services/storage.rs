use gloo::storage::{LocalStorage, Storage};
use log::warn;
use shared::KeyValueStorage;

/// The browser's `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read '{}' from local storage: {:?}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            warn!("Failed to write '{}' to local storage: {:?}", key, e);
        }
    }
}
