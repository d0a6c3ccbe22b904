// Key-value preference storage. The page only persists the theme, but components
// get a store handed to them instead of reaching for `localStorage` themselves.

use crate::error::{FieldError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{Storage, Window};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

// In-process store, used when the browser refuses access to `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open(window: &Window) -> Result<Self> {
        let storage = window
            .local_storage()?
            .ok_or_else(|| FieldError::Js("localStorage unavailable".into()))?;
        Ok(LocalStore { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.storage.set_item(key, value)?)
    }
}
