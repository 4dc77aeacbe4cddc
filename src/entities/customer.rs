//! Customer records

use chrono::NaiveDate;

crate::impl_entity!(
    /// A buying customer
    Customer,
    "customer",
    "customers",
    search: [name, email, address],
    required: [name],
    exposed: [name, email, phone, address, created_at, last_purchase, total_spent],
    {
        name: String,
        email: String,
        phone: String,
        address: String,
        created_at: NaiveDate,
        last_purchase: NaiveDate,
        total_spent: f64,
    }
);
