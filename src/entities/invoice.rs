//! Invoices and their line items
//!
//! Line-item editing keeps two invariants after every call:
//! `item.amount == item.quantity * item.price` for any item whose quantity or
//! price was touched, and `total_amount == Σ item.amount`.

use crate::core::id::generate_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::string_enum!(
    /// Lifecycle state of an invoice
    InvoiceStatus {
        #[default]
        Draft = "draft",
        Sent = "sent",
        Paid = "paid",
        Overdue = "overdue",
    }
);

impl InvoiceStatus {
    /// Sent or overdue: issued and still waiting for payment
    pub fn is_pending(&self) -> bool {
        matches!(self, InvoiceStatus::Sent | InvoiceStatus::Overdue)
    }
}

/// One billed line of an invoice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvoiceItem {
    pub id: String,
    pub description: String,
    pub quantity: u32,
    pub price: f64,
    pub amount: f64,
}

impl InvoiceItem {
    /// A priced line with its amount already computed
    pub fn new(description: impl Into<String>, quantity: u32, price: f64) -> Self {
        let mut item = Self {
            id: generate_id(),
            description: description.into(),
            quantity,
            price,
            amount: 0.0,
        };
        item.recompute_amount();
        item
    }

    /// The placeholder row added by "add item": quantity 1, price 0
    pub fn blank() -> Self {
        Self::new(String::new(), 1, 0.0)
    }

    pub fn recompute_amount(&mut self) {
        self.amount = f64::from(self.quantity) * self.price;
    }
}

/// A single edit made to a line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEdit {
    Description(String),
    Quantity(u32),
    Price(f64),
}

crate::impl_entity!(
    /// A bill sent to a customer
    Invoice,
    "invoice",
    "invoices",
    search: [customer_name, id],
    required: [],
    exposed: [customer_id, customer_name, date, due_date, total_amount, status],
    normalize: Invoice::recalculate,
    {
        customer_id: String,
        /// Copied from the customer at creation; never kept in sync
        customer_name: String,
        date: NaiveDate,
        due_date: NaiveDate,
        items: Vec<InvoiceItem>,
        total_amount: f64,
        status: InvoiceStatus,
    }
);

impl Invoice {
    /// Sum of line amounts
    pub fn items_total(&self) -> f64 {
        self.items.iter().fold(0.0, |total, item| total + item.amount)
    }

    /// Recompute every line amount and the invoice total
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.recompute_amount();
        }
        self.total_amount = self.items_total();
    }

    /// Append a blank line and return its id
    pub fn add_item(&mut self) -> String {
        let item = InvoiceItem::blank();
        let id = item.id.clone();
        self.items.push(item);
        self.total_amount = self.items_total();
        id
    }

    /// Remove a line by id, returning whether it existed
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.total_amount = self.items_total();
        self.items.len() != before
    }

    /// Apply one edit to a line, returning whether the line exists.
    ///
    /// Quantity and price edits recompute the line amount; every edit
    /// recomputes the total.
    pub fn edit_item(&mut self, item_id: &str, edit: ItemEdit) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) else {
            return false;
        };

        match edit {
            ItemEdit::Description(description) => item.description = description,
            ItemEdit::Quantity(quantity) => {
                item.quantity = quantity;
                item.recompute_amount();
            }
            ItemEdit::Price(price) => {
                item.price = price;
                item.recompute_amount();
            }
        }

        self.total_amount = self.items_total();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn assert_invariants(invoice: &Invoice) {
        for item in &invoice.items {
            assert!(approx(item.amount, f64::from(item.quantity) * item.price));
        }
        assert!(approx(invoice.total_amount, invoice.items_total()));
    }

    #[test]
    fn test_new_item_amount() {
        let item = InvoiceItem::new("Item 1", 3, 250.5);
        assert!(approx(item.amount, 751.5));
        assert_eq!(item.id.len(), 9);
    }

    #[test]
    fn test_add_edit_remove_keeps_totals() {
        let mut invoice = Invoice::default();

        let first = invoice.add_item();
        assert_invariants(&invoice);
        assert!(approx(invoice.total_amount, 0.0));

        assert!(invoice.edit_item(&first, ItemEdit::Price(120.0)));
        assert_invariants(&invoice);
        assert!(invoice.edit_item(&first, ItemEdit::Quantity(4)));
        assert_invariants(&invoice);
        assert!(approx(invoice.total_amount, 480.0));

        let second = invoice.add_item();
        assert!(invoice.edit_item(&second, ItemEdit::Price(20.0)));
        assert!(invoice.edit_item(&second, ItemEdit::Description("Cable".to_string())));
        assert_invariants(&invoice);
        assert!(approx(invoice.total_amount, 500.0));

        assert!(invoice.remove_item(&first));
        assert_invariants(&invoice);
        assert!(approx(invoice.total_amount, 20.0));
        assert!(!invoice.remove_item(&first));
    }

    #[test]
    fn test_edit_unknown_item() {
        let mut invoice = Invoice::default();
        invoice.add_item();
        assert!(!invoice.edit_item("nope", ItemEdit::Quantity(2)));
        assert_invariants(&invoice);
    }

    #[test]
    fn test_recalculate_repairs_stale_amounts() {
        let mut invoice = Invoice {
            items: vec![InvoiceItem {
                id: "a".to_string(),
                description: String::new(),
                quantity: 2,
                price: 10.0,
                amount: 0.0,
            }],
            total_amount: 99.0,
            ..Invoice::default()
        };
        invoice.recalculate();
        assert_invariants(&invoice);
        assert!(approx(invoice.total_amount, 20.0));
    }

    #[test]
    fn test_removing_last_item_leaves_positive_zero() {
        let mut invoice = Invoice::default();
        let only = invoice.add_item();
        assert!(invoice.edit_item(&only, ItemEdit::Price(15.0)));

        assert!(invoice.remove_item(&only));
        assert!(invoice.total_amount.is_sign_positive());
        assert_eq!(format!("{:.2}", invoice.total_amount), "0.00");
    }

    #[test]
    fn test_normalize_recomputes_total() {
        use crate::core::entity::Entity;

        let mut invoice = Invoice {
            items: vec![InvoiceItem::new("Item", 3, 10.0)],
            total_amount: 0.0,
            ..Invoice::default()
        };
        invoice.normalize();
        assert!(approx(invoice.total_amount, 30.0));
    }

    #[test]
    fn test_pending_statuses() {
        let pending: Vec<_> = InvoiceStatus::ALL
            .iter()
            .filter(|s| s.is_pending())
            .collect();
        assert_eq!(pending, vec![&InvoiceStatus::Sent, &InvoiceStatus::Overdue]);
    }
}
