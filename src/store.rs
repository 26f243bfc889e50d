//! Keyed record store owned by a [`ResourceActor`](crate::actor_framework::ResourceActor).
//!
//! The store has no side effects beyond its own map. Durability and audit are
//! handled by the actor after a successful mutation.

use std::collections::btree_map::{BTreeMap, Entry};

use thiserror::Error;

use crate::actor_framework::Entity;
use crate::domain::Product;

/// The product catalog.
pub type ProductStore = Store<Product>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
}

#[derive(Debug, Clone)]
pub struct Store<T: Entity> {
    records: BTreeMap<T::Id, T>,
}

impl<T: Entity> Default for Store<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Entity> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted records.
    ///
    /// # Errors
    /// Returns [`StoreError::AlreadyExists`] if two records share an id.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    pub fn get(&self, id: &T::Id) -> Result<&T, StoreError> {
        self.records
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.records.contains_key(id)
    }

    /// Insert a new record, keyed by its own id.
    pub fn insert(&mut self, record: T) -> Result<(), StoreError> {
        match self.records.entry(record.id().clone()) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists(entry.key().to_string())),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    /// Swap in a new version of an existing record and return the old one.
    pub fn replace(&mut self, id: &T::Id, record: T) -> Result<T, StoreError> {
        match self.records.get_mut(id) {
            Some(slot) => Ok(std::mem::replace(slot, record)),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// All records in id order.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
