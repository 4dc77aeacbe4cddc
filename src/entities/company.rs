//! Company records

use chrono::NaiveDate;

crate::string_enum!(
    /// Whether a company is in use
    CompanyStatus {
        #[default]
        Active = "active",
        Inactive = "inactive",
    }
);

crate::impl_entity!(
    /// An operating company
    Company,
    "company",
    "companies",
    search: [name, code, email],
    required: [code, name],
    exposed: [code, name, address, phone, email, created_at, status],
    {
        code: String,
        name: String,
        address: String,
        phone: String,
        email: String,
        created_at: NaiveDate,
        status: CompanyStatus,
    }
);
