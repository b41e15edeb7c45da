//! In-memory store of loaded themes.
//!
//! No eviction, bound, or expiry: entries stay until [`ThemeCache::clear`].
//! Whether the cache is consulted is decided by the caller.

use crate::theme::ThemeConfig;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct ThemeCache {
    entries: RwLock<HashMap<String, Arc<ThemeConfig>>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<ThemeConfig>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Insert or replace; the last write wins.
    pub fn set(&self, name: impl Into<String>, config: Arc<ThemeConfig>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), config);
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
