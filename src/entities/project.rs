//! Project records

use chrono::NaiveDate;

crate::string_enum!(
    ProjectStatus {
        #[default]
        Active = "active",
        Inactive = "inactive",
        Completed = "completed",
    }
);

crate::impl_entity!(
    /// A project run by a company
    Project,
    "project",
    "projects",
    search: [name, code, company_name],
    required: [code, name],
    exposed: [code, name, company_id, company_name, start_date, end_date, status, description],
    {
        code: String,
        name: String,
        company_id: String,
        /// Copied from the company at creation; never kept in sync
        company_name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: ProjectStatus,
        description: String,
    }
);
