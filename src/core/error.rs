//! Typed error handling for the back office
//!
//! Callers can match on a specific category instead of a generic
//! `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`EntityError`]: record lookups and (de)serialization
//! - [`ValidationError`]: required fields and malformed patches
//! - [`StorageError`]: in-memory store failures
//! - [`ConfigError`]: configuration loading
//!
//! An absent record is not an error for `get`, `update` and `delete`; those
//! return `None` or `false`. Only `DataService::fetch` turns absence into
//! [`EntityError::NotFound`].

use std::collections::BTreeMap;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = BackofficeError> = std::result::Result<T, E>;

/// The main error type for the back office
#[derive(Debug, Error)]
pub enum BackofficeError {
    /// Entity-related errors
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BackofficeError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BackofficeError::Entity(e) => e.error_code(),
            BackofficeError::Validation(e) => e.error_code(),
            BackofficeError::Storage(_) => "STORAGE_ERROR",
            BackofficeError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// True when this error reports an absent record
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackofficeError::Entity(EntityError::NotFound { .. }))
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity operations
#[derive(Debug, Error)]
pub enum EntityError {
    /// Entity was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },

    /// Failed to serialize/deserialize entity
    #[error("Failed to serialize/deserialize {entity_type}: {message}")]
    Serialization {
        entity_type: String,
        message: String,
    },
}

impl EntityError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::Serialization { .. } => "ENTITY_SERIALIZATION_ERROR",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised before a record is written
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed validation (field -> messages)
    #[error("Validation failed for {entity_type}: {}", format_field_errors(.errors))]
    FieldErrors {
        entity_type: String,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// The update patch is not a JSON object or does not fit the record
    #[error("Invalid patch for {entity_type}: {message}")]
    InvalidPatch {
        entity_type: String,
        message: String,
    },
}

impl ValidationError {
    /// Build a `FieldErrors` value with a "required" message per field
    pub fn required(entity_type: &str, fields: &[&str]) -> Self {
        let errors = fields
            .iter()
            .map(|field| (field.to_string(), vec![format!("'{field}' is required")]))
            .collect();
        ValidationError::FieldErrors {
            entity_type: entity_type.to_string(),
            errors,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors { .. } => "VALIDATION_ERROR",
            ValidationError::InvalidPatch { .. } => "INVALID_PATCH",
        }
    }
}

fn format_field_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .values()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the in-memory store
#[derive(Debug, Error)]
pub enum StorageError {
    /// A writer panicked while holding the collection lock
    #[error("Failed to acquire {mode} lock on {entity_type}")]
    LockPoisoned {
        entity_type: String,
        mode: &'static str,
    },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
