//! # Backoffice
//!
//! An in-memory CRM/ERP back office: customers, employees, suppliers,
//! invoices, receipts, feedback, companies, projects, users, roles and
//! access rights, each behind an async CRUD service that simulates network
//! latency.
//!
//! ## Features
//!
//! - **Uniform services**: every entity implements [`core::DataService`]
//!   (`list`, `get`, `create`, `update`, `delete`, `search`)
//! - **Shallow-merge updates**: JSON patches overwrite only the keys they name
//! - **Listing**: case-insensitive search, status filter, clamped pagination
//!   and page-number bars
//! - **Invoices**: line-item editing that keeps amounts and totals consistent
//! - **Seed data**: reproducible generated records plus fixed catalogues
//! - **Reports**: dashboard summary and monthly/quarterly/yearly figures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice::prelude::*;
//!
//! let office = Backoffice::new(&BackofficeConfig::default());
//!
//! let page = office
//!     .list_page(&office.invoices, &office.query().search("customer 1").status("paid"))
//!     .await?;
//!
//! let customer = office.customers.fetch("k3j9x0a1b").await?;
//! office
//!     .customers
//!     .update(&customer.id, patch(json!({ "phone": "13900139000" })))
//!     .await?;
//! ```

pub mod backoffice;
pub mod config;
pub mod core;
pub mod entities;
pub mod reports;
pub mod seed;
pub mod services;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::Entity,
        field::FieldValue,
        service::{DataService, Patch, patch},
    };

    // === Errors ===
    pub use crate::core::error::{
        BackofficeError, ConfigError, EntityError, Result, StorageError, ValidationError,
    };

    // === Listing ===
    pub use crate::core::query::{ALL_STATUSES, ListQuery, PAGE_SIZES, Page, PageLink, PaginationMeta};

    // === Macros ===
    pub use crate::{impl_entity, string_enum};

    // === Entities ===
    pub use crate::entities::*;

    // === Storage & Services ===
    pub use crate::services::FeedbackService;
    pub use crate::storage::InMemoryDataService;

    // === Back office ===
    pub use crate::backoffice::{Backoffice, DashboardSummary, TopCustomer};
    pub use crate::config::{BackofficeConfig, SeedConfig};
    pub use crate::reports::{Report, ReportPeriod};
    pub use crate::seed::SeedData;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::json;
}
