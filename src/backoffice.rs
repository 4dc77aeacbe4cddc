//! The back office: one service per entity over a shared seed
//!
//! Each collection is independent. Nothing cascades: deleting a customer
//! leaves its invoices and receipts (and their copied `customer_name`) in
//! place.

use crate::config::BackofficeConfig;
use crate::core::entity::Entity;
use crate::core::error::Result;
use crate::core::query::{ListQuery, Page};
use crate::core::service::DataService;
use crate::entities::{
    AccessRight, Company, Customer, Employee, Invoice, ItemEdit, Project, Receipt, Supplier, User,
    UserRole, group_by_module,
};
use crate::reports::{PeriodFigures, monthly_sales};
use crate::seed::SeedData;
use crate::services::FeedbackService;
use crate::storage::InMemoryDataService;
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use std::time::Duration;

/// Aggregated services for every entity
#[derive(Clone)]
pub struct Backoffice {
    pub employees: InMemoryDataService<Employee>,
    pub customers: InMemoryDataService<Customer>,
    pub suppliers: InMemoryDataService<Supplier>,
    pub invoices: InMemoryDataService<Invoice>,
    pub receipts: InMemoryDataService<Receipt>,
    pub feedback: FeedbackService,
    pub companies: InMemoryDataService<Company>,
    pub projects: InMemoryDataService<Project>,
    pub users: InMemoryDataService<User>,
    pub roles: InMemoryDataService<UserRole>,
    pub access_rights: InMemoryDataService<AccessRight>,
    page_size: usize,
}

impl Backoffice {
    /// Seed a back office dated today
    pub fn new(config: &BackofficeConfig) -> Self {
        Self::seeded_on(config, Local::now().date_naive())
    }

    /// Seed a back office whose generated dates are relative to `today`
    pub fn seeded_on(config: &BackofficeConfig, today: NaiveDate) -> Self {
        let data = SeedData::generate(&config.seed, today);
        Self::from_data(data, config.latency(), config.effective_page_size())
    }

    /// Build from an explicit data set
    pub fn from_data(data: SeedData, latency: Duration, page_size: usize) -> Self {
        tracing::info!(latency_ms = latency.as_millis() as u64, page_size, "back office ready");
        Self {
            employees: InMemoryDataService::seeded(data.employees, latency),
            customers: InMemoryDataService::seeded(data.customers, latency),
            suppliers: InMemoryDataService::seeded(data.suppliers, latency),
            invoices: InMemoryDataService::seeded(data.invoices, latency),
            receipts: InMemoryDataService::seeded(data.receipts, latency),
            feedback: FeedbackService::new(InMemoryDataService::seeded(data.feedback, latency)),
            companies: InMemoryDataService::seeded(data.companies, latency),
            projects: InMemoryDataService::seeded(data.projects, latency),
            users: InMemoryDataService::seeded(data.users, latency),
            roles: InMemoryDataService::seeded(data.roles, latency),
            access_rights: InMemoryDataService::seeded(data.access_rights, latency),
            page_size,
        }
    }

    /// Rows per page for list views
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// A first-page query using the configured page size
    pub fn query(&self) -> ListQuery {
        ListQuery::new().page_size(self.page_size)
    }

    /// Load a collection, then search, filter and paginate it
    pub async fn list_page<T, S>(&self, service: &S, query: &ListQuery) -> Result<Page<T>>
    where
        T: Entity,
        S: DataService<T>,
    {
        let records = service.list().await?;
        Ok(query.apply(records))
    }

    /// Apply one line-item edit to a stored invoice and save it.
    ///
    /// Returns `None` when the invoice or the line does not exist.
    pub async fn edit_invoice_item(
        &self,
        invoice_id: &str,
        item_id: &str,
        edit: ItemEdit,
    ) -> Result<Option<Invoice>> {
        let saved = self
            .invoices
            .modify(invoice_id, |invoice| invoice.edit_item(item_id, edit).then_some(()))
            .await?;
        Ok(saved.map(|(invoice, ())| invoice))
    }

    /// Append a blank line to a stored invoice and save it.
    ///
    /// Returns the saved invoice and the new line's id.
    pub async fn add_invoice_item(&self, invoice_id: &str) -> Result<Option<(Invoice, String)>> {
        self.invoices
            .modify(invoice_id, |invoice| Some(invoice.add_item()))
            .await
    }

    /// Remove a line from a stored invoice and save it
    pub async fn remove_invoice_item(
        &self,
        invoice_id: &str,
        item_id: &str,
    ) -> Result<Option<Invoice>> {
        let saved = self
            .invoices
            .modify(invoice_id, |invoice| invoice.remove_item(item_id).then_some(()))
            .await?;
        Ok(saved.map(|(invoice, ())| invoice))
    }

    /// Toggle a permission code on a stored role and save it.
    ///
    /// Returns the saved role, or `None` if the role does not exist.
    pub async fn toggle_role_permission(&self, role_id: &str, code: &str) -> Result<Option<UserRole>> {
        let saved = self
            .roles
            .modify(role_id, |role| Some(role.toggle_permission(code)))
            .await?;
        Ok(saved.map(|(role, _)| role))
    }

    /// Access rights matching `term`, grouped by module
    pub async fn access_rights_by_module(
        &self,
        term: &str,
    ) -> Result<IndexMap<String, Vec<AccessRight>>> {
        let rights: Vec<_> = self
            .access_rights
            .list()
            .await?
            .into_iter()
            .filter(|r| r.matches_term(term))
            .collect();
        Ok(group_by_module(&rights))
    }

    /// Live dashboard figures. The collections load concurrently, so the
    /// summary costs one round trip.
    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        let (customers, employees, suppliers, invoices, receipts) = futures::try_join!(
            self.customers.list(),
            self.employees.list(),
            self.suppliers.list(),
            self.invoices.list(),
            self.receipts.list(),
        )?;

        let pending: Vec<_> = invoices.iter().filter(|i| i.status.is_pending()).collect();
        let sales_trend = monthly_sales();

        let mut top_customers: Vec<_> = customers
            .iter()
            .map(|c| TopCustomer {
                name: c.name.clone(),
                total_spent: c.total_spent,
            })
            .collect();
        top_customers.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
        top_customers.truncate(TOP_CUSTOMERS);

        Ok(DashboardSummary {
            customers: customers.len(),
            employees: employees.len(),
            suppliers: suppliers.len(),
            pending_invoices: pending.len(),
            outstanding_amount: pending.iter().map(|i| i.total_amount).sum(),
            revenue: receipts.iter().map(|r| r.amount).sum(),
            total_expenses: sales_trend.iter().map(|m| m.expenses).sum(),
            top_customers,
            sales_trend,
        })
    }
}

/// Number of customers ranked on the dashboard
pub const TOP_CUSTOMERS: usize = 5;

/// Headline figures for the dashboard page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub customers: usize,
    pub employees: usize,
    pub suppliers: usize,
    /// Invoices sent or overdue
    pub pending_invoices: usize,
    /// Σ total of pending invoices
    pub outstanding_amount: f64,
    /// Σ receipt amounts
    pub revenue: f64,
    /// Σ expenses over the sales trend
    pub total_expenses: u64,
    /// Highest `total_spent` first
    pub top_customers: Vec<TopCustomer>,
    pub sales_trend: Vec<PeriodFigures>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCustomer {
    pub name: String,
    pub total_spent: f64,
}
