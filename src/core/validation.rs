//! Required-field validation applied before records are written

use crate::core::entity::Entity;
use crate::core::error::ValidationError;

/// Reject a record whose required fields are blank
pub fn validate_required<T: Entity>(record: &T) -> Result<(), ValidationError> {
    let missing = record.missing_required();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::required(
            T::resource_name_singular(),
            &missing,
        ))
    }
}
