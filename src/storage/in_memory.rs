//! In-memory implementation of DataService with simulated network latency

use crate::core::entity::Entity;
use crate::core::error::{EntityError, Result, StorageError, ValidationError};
use crate::core::id::generate_id;
use crate::core::service::{DataService, Patch};
use crate::core::validation::validate_required;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Default artificial round-trip delay
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// In-memory data service for one entity type
///
/// Records keep insertion order. Every operation first sleeps for the
/// configured latency, then takes the lock; the lock is never held across
/// an await point. Clones share the same collection.
#[derive(Clone)]
pub struct InMemoryDataService<T> {
    records: Arc<RwLock<Vec<T>>>,
    latency: Duration,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create an empty service with no latency
    pub fn new() -> Self {
        Self::seeded(Vec::new(), Duration::ZERO)
    }

    /// Create a service holding `records`, delaying every call by `latency`
    pub fn seeded(records: Vec<T>, latency: Duration) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency,
        }
    }

    /// Replace the artificial delay
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Number of stored records, without the artificial delay
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Read-modify-write one record under a single write lock.
    ///
    /// `change` edits a working copy and returns `Some(output)` to commit or
    /// `None` to leave the record untouched. The copy is normalized and
    /// must still pass required-field validation before it replaces the
    /// stored record. Returns `None` when the record is absent or the change
    /// was abandoned.
    pub async fn modify<R, F>(&self, id: &str, change: F) -> Result<Option<(T, R)>>
    where
        F: FnOnce(&mut T) -> Option<R> + Send,
    {
        self.simulate_latency().await;

        let mut records = self.write()?;
        let Some(slot) = records.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!(entity = T::resource_name_singular(), id, "modify of absent record");
            return Ok(None);
        };

        let mut working = slot.clone();
        let Some(output) = change(&mut working) else {
            return Ok(None);
        };
        commit(slot, working, id)?;

        tracing::debug!(entity = T::resource_name_singular(), id, "modified");
        Ok(Some((slot.clone(), output)))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>> {
        self.records.read().map_err(|_| {
            StorageError::LockPoisoned {
                entity_type: T::resource_name_singular().to_string(),
                mode: "read",
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
        self.records.write().map_err(|_| {
            StorageError::LockPoisoned {
                entity_type: T::resource_name_singular().to_string(),
                mode: "write",
            }
            .into()
        })
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay `patch` onto the serialized record and read it back.
///
/// The `id` key is ignored so a record can never change identity.
fn merge_patch<T: Entity>(record: &T, patch: &Patch) -> Result<T> {
    let entity_type = T::resource_name_singular();
    let mut value = serde_json::to_value(record).map_err(|e| EntityError::Serialization {
        entity_type: entity_type.to_string(),
        message: e.to_string(),
    })?;

    let Value::Object(fields) = &mut value else {
        return Err(EntityError::Serialization {
            entity_type: entity_type.to_string(),
            message: "record does not serialize to an object".to_string(),
        }
        .into());
    };

    for (key, field) in patch.iter().filter(|(key, _)| key.as_str() != "id") {
        fields.insert(key.clone(), field.clone());
    }

    serde_json::from_value(value).map_err(|e| {
        ValidationError::InvalidPatch {
            entity_type: entity_type.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Normalize and validate `candidate`, then store it in `slot`.
///
/// On failure `slot` keeps its previous value.
fn commit<T: Entity>(slot: &mut T, mut candidate: T, id: &str) -> Result<()> {
    candidate.normalize();
    if let Err(err) = validate_required(&candidate) {
        tracing::warn!(entity = T::resource_name_singular(), id, error = %err, "rejected update");
        return Err(err.into());
    }
    *slot = candidate;
    Ok(())
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        self.simulate_latency().await;

        entity.normalize();
        if let Err(err) = validate_required(&entity) {
            tracing::warn!(entity = T::resource_name_singular(), error = %err, "rejected create");
            return Err(err.into());
        }

        let mut records = self.write()?;
        let mut id = generate_id();
        while records.iter().any(|r| r.id() == id) {
            id = generate_id();
        }
        entity.set_id(id);
        records.push(entity.clone());

        tracing::debug!(entity = T::resource_name_singular(), id = entity.id(), "created");
        Ok(entity)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        self.simulate_latency().await;

        let records = self.read()?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        self.simulate_latency().await;

        Ok(self.read()?.clone())
    }

    async fn update(&self, id: &str, patch: Patch) -> Result<Option<T>> {
        self.simulate_latency().await;

        let mut records = self.write()?;
        let Some(slot) = records.iter_mut().find(|r| r.id() == id) else {
            tracing::debug!(entity = T::resource_name_singular(), id, "update of absent record");
            return Ok(None);
        };

        let merged = match merge_patch(slot, &patch) {
            Ok(merged) => merged,
            Err(err) => {
                tracing::warn!(entity = T::resource_name_singular(), id, error = %err, "rejected update");
                return Err(err);
            }
        };
        commit(slot, merged, id)?;

        tracing::debug!(
            entity = T::resource_name_singular(),
            id,
            fields = patch.len(),
            "updated"
        );
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.simulate_latency().await;

        let mut records = self.write()?;
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };
        records.remove(index);

        tracing::debug!(entity = T::resource_name_singular(), id, "deleted");
        Ok(true)
    }

    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>> {
        self.simulate_latency().await;

        let records = self.read()?;
        Ok(records
            .iter()
            .filter(|r| r.field_value(field).is_some_and(|v| v.to_text() == value))
            .cloned()
            .collect())
    }
}
