//! Login accounts

use chrono::NaiveDate;

crate::string_enum!(
    UserStatus {
        #[default]
        Active = "active",
        Inactive = "inactive",
    }
);

crate::impl_entity!(
    /// An account belonging to a company and holding one role
    User,
    "user",
    "users",
    search: [username, email, company_name, role_name],
    required: [username],
    exposed: [username, email, phone, company_id, company_name, role_id, role_name, status, created_at],
    {
        username: String,
        email: String,
        phone: String,
        company_id: String,
        company_name: String,
        role_id: String,
        role_name: String,
        status: UserStatus,
        created_at: NaiveDate,
    }
);
