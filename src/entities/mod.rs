//! Back-office entity definitions

pub mod macros;

pub mod access_right;
pub mod company;
pub mod customer;
pub mod employee;
pub mod feedback;
pub mod invoice;
pub mod project;
pub mod receipt;
pub mod role;
pub mod supplier;
pub mod user;

pub use access_right::{AccessRight, group_by_module};
pub use company::{Company, CompanyStatus};
pub use customer::Customer;
pub use employee::{Employee, IdType};
pub use feedback::{Feedback, FeedbackStatus, FeedbackSubmission};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus, ItemEdit};
pub use project::{Project, ProjectStatus};
pub use receipt::Receipt;
pub use role::UserRole;
pub use supplier::Supplier;
pub use user::{User, UserStatus};
