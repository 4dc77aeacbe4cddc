//! Service trait for entity operations

use crate::core::entity::Entity;
use crate::core::error::{EntityError, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A shallow patch: top-level record fields (camelCase) to overwrite
pub type Patch = Map<String, Value>;

/// Service trait for managing one entity collection
///
/// Implementations provide CRUD operations for a specific entity type.
/// Absent records are reported as `None` / `false`, never as errors.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Create a new entity. Any id on the input is replaced by a fresh one.
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all entities
    async fn list(&self) -> Result<Vec<T>>;

    /// Shallow-merge `patch` into the entity with this ID.
    ///
    /// Returns `None` when no such entity exists.
    async fn update(&self, id: &str, patch: Patch) -> Result<Option<T>>;

    /// Delete an entity, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Search entities by exact field value
    async fn search(&self, field: &str, value: &str) -> Result<Vec<T>>;

    /// Get an entity by ID, treating absence as [`EntityError::NotFound`]
    async fn fetch(&self, id: &str) -> Result<T> {
        self.get(id)
            .await?
            .ok_or_else(|| EntityError::not_found(T::resource_name_singular(), id).into())
    }
}

/// Build a [`Patch`] from a `serde_json::json!` object literal.
///
/// Non-object values produce an empty patch.
pub fn patch(value: Value) -> Patch {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
