//! Payment receipts

use chrono::NaiveDate;

crate::impl_entity!(
    /// A payment received from a customer
    Receipt,
    "receipt",
    "receipts",
    search: [customer_name, id, description, payment_method],
    required: [],
    exposed: [customer_id, customer_name, date, amount, payment_method, description],
    {
        customer_id: String,
        /// Copied from the customer at creation; never kept in sync
        customer_name: String,
        date: NaiveDate,
        amount: f64,
        payment_method: String,
        description: String,
    }
);
