//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::query::{DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::storage::DEFAULT_LATENCY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How many records of each kind to generate at start-up
///
/// Feedback, roles and access rights are fixed catalogues and are not
/// counted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub employees: usize,
    pub customers: usize,
    pub suppliers: usize,
    pub invoices: usize,
    pub receipts: usize,
    pub companies: usize,
    pub projects: usize,
    pub users: usize,

    /// Fixed RNG seed for reproducible data; random when absent
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            employees: 10,
            customers: 15,
            suppliers: 8,
            invoices: 12,
            receipts: 15,
            companies: 5,
            projects: 5,
            users: 5,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// No generated records at all (fixed catalogues still load)
    pub fn empty() -> Self {
        Self {
            employees: 0,
            customers: 0,
            suppliers: 0,
            invoices: 0,
            receipts: 0,
            companies: 0,
            projects: 0,
            users: 0,
            rng_seed: None,
        }
    }
}

/// Complete configuration for a back office instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackofficeConfig {
    /// Artificial delay applied to every service call, in milliseconds
    pub latency_ms: u64,

    /// Default rows per page for list views
    pub page_size: usize,

    /// Seed data generation
    pub seed: SeedConfig,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY.as_millis() as u64,
            page_size: DEFAULT_PAGE_SIZE,
            seed: SeedConfig::default(),
        }
    }
}

impl BackofficeConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Configuration for tests: no latency, fixed seed
    pub fn for_tests() -> Self {
        Self {
            latency_ms: 0,
            page_size: DEFAULT_PAGE_SIZE,
            seed: SeedConfig {
                rng_seed: Some(42),
                ..SeedConfig::default()
            },
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// The configured page size, or the default when it is not one of the
    /// offered sizes
    pub fn effective_page_size(&self) -> usize {
        if PAGE_SIZES.contains(&self.page_size) {
            self.page_size
        } else {
            tracing::warn!(
                page_size = self.page_size,
                fallback = DEFAULT_PAGE_SIZE,
                "unsupported page size"
            );
            DEFAULT_PAGE_SIZE
        }
    }
}
