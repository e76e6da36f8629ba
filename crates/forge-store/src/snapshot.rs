//! Entity list ↔ JSON array persistence, shared by every domain.

use std::marker::PhantomData;
use std::sync::Arc;

use forge_core::entities::Entity;
use forge_schema::SchemaRegistry;
use serde_json::Value;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Persists the full entity list of one domain under
/// [`Domain::storage_key`](forge_core::enums::Domain::storage_key).
///
/// Timestamps are written as RFC 3339 strings. On load, entries that fail
/// schema validation are logged; entries that fail to deserialize are
/// skipped with a warning instead of discarding the whole list.
pub struct SnapshotStore<T> {
    kv: Arc<dyn KeyValueStore>,
    registry: Arc<SchemaRegistry>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> SnapshotStore<T> {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>, registry: Arc<SchemaRegistry>) -> Self {
        Self {
            kv,
            registry,
            _entity: PhantomData,
        }
    }

    /// Key of the entry holding this domain's list.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        T::DOMAIN.storage_key()
    }

    /// Load and rehydrate the stored list. A missing entry is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the backend fails, or the entry is
    /// not a JSON array.
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        let key = self.key();
        let Some(text) = self.kv.get(key)? else {
            return Ok(Vec::new());
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::persistence(key, e))?;
        let Value::Array(items) = value else {
            return Err(StoreError::persistence(key, "stored value is not a JSON array"));
        };

        let mut entities = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if let Err(e) = self.registry.validate_entity::<T>(&item) {
                tracing::warn!(key, index, %e, "stored entry does not match its schema");
            }
            match serde_json::from_value::<T>(item) {
                Ok(entity) => entities.push(entity),
                Err(e) => tracing::warn!(key, index, %e, "skipping unreadable stored entry"),
            }
        }

        tracing::debug!(key, count = entities.len(), "snapshot loaded");
        Ok(entities)
    }

    /// Replace the stored list with `entities`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if serialization or the write fails.
    pub fn save(&self, entities: &[T]) -> Result<(), StoreError> {
        let key = self.key();
        let text = serde_json::to_string_pretty(entities)
            .map_err(|e| StoreError::persistence(key, e))?;
        self.kv.set(key, &text)
    }

    /// Remove the stored entry entirely.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the backend fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.kv.remove(self.key())
    }
}
