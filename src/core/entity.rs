//! Entity trait defining the core abstraction for all back-office records

use crate::core::field::FieldValue;
use serde::{Serialize, de::DeserializeOwned};

/// Base trait for every record kept by the back office.
///
/// All entities have:
/// - id: a random base-36 string assigned on creation
/// - a fixed set of exposed fields, reachable by name through `field_value`
/// - a fixed list of search fields used by the listing search box
/// - a list of fields that must not be blank on creation
///
/// Field names are the Rust field names (`customer_name`); the serialized
/// form and update patches use camelCase (`customerName`).
pub trait Entity:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The plural resource name (e.g., "customers", "companies")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "customer", "company")
    fn resource_name_singular() -> &'static str;

    /// Fields matched by the free-text search, in display order
    fn search_fields() -> &'static [&'static str];

    /// Fields that must hold a non-blank value when a record is created
    fn required_fields() -> &'static [&'static str] {
        &[]
    }

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;

    /// Replace the identifier. Used by stores when a record is created.
    fn set_id(&mut self, id: String);

    /// Get the value of an exposed field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Recompute derived fields. Stores call this before every write.
    fn normalize(&mut self) {}

    /// The status label, for entities that carry one
    fn status(&self) -> Option<String> {
        self.field_value("status").map(|v| v.to_text())
    }

    /// Case-insensitive substring match across `search_fields`.
    ///
    /// The term is trimmed first, so a blank term matches every record.
    fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        Self::search_fields().iter().any(|field| {
            self.field_value(field)
                .is_some_and(|value| value.contains_lowercase(&needle))
        })
    }

    /// Names of required fields that are blank on this record
    fn missing_required(&self) -> Vec<&'static str> {
        Self::required_fields()
            .iter()
            .copied()
            .filter(|field| self.field_value(field).is_none_or(|v| v.is_blank()))
            .collect()
    }
}
