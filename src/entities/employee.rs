//! Employee records

use chrono::NaiveDate;

crate::string_enum!(
    /// Kind of identity document on file
    IdType {
        #[default]
        IdCard = "idCard",
        Passport = "passport",
        DriverLicense = "driverLicense",
        Other = "other",
    }
);

crate::impl_entity!(
    /// A member of staff
    Employee,
    "employee",
    "employees",
    search: [name, email, position],
    required: [name],
    exposed: [name, email, phone, id_type, id_no, position, department, hire_date, salary],
    {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        avatar: Option<String>,
        email: String,
        phone: String,
        id_type: IdType,
        id_no: String,
        position: String,
        department: String,
        hire_date: NaiveDate,
        salary: f64,
    }
);
