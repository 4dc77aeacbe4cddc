//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod field;
pub mod id;
pub mod query;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{BackofficeError, Result};
pub use field::FieldValue;
pub use query::{ListQuery, Page, PageLink, PaginationMeta};
pub use service::{DataService, Patch};
