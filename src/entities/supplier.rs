//! Supplier records

use chrono::NaiveDate;

crate::impl_entity!(
    /// A supplier of goods or services
    Supplier,
    "supplier",
    "suppliers",
    search: [name, contact_person, category],
    required: [name],
    exposed: [name, contact_person, email, phone, address, category, since],
    {
        name: String,
        contact_person: String,
        email: String,
        phone: String,
        address: String,
        category: String,
        since: NaiveDate,
    }
);
