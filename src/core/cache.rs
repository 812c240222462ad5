//! Parse cache.
//!
//! Memoizes [`parse`] output keyed by the exact raw template. The cache is an
//! owned value: whoever manages a dictionary's lifetime owns its cache and may
//! `clear()` it when the dictionary is reloaded.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use crate::core::{data::Part, parsers::template::parse};

#[derive(Debug, Default)]
pub struct ParseCache {
    entries: RwLock<HashMap<String, Arc<[Part]>>>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parts for `raw`, parsing on a miss.
    ///
    /// Concurrent misses for the same template may each parse; the last store wins.
    pub fn get_parts(&self, raw: &str) -> Arc<[Part]> {
        if let Some(parts) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(raw)
        {
            return Arc::clone(parts);
        }

        let parts: Arc<[Part]> = parse(raw).into();
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(raw.to_string(), Arc::clone(&parts));
        parts
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

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
