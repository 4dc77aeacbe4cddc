//! Shared test harness for data service testing
//!
//! Provides helpers for building `Customer` records and assertions shared
//! by the integration tests.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

pub mod data_service_tests;

use backoffice::entities::Customer;
use chrono::NaiveDate;

/// A customer with the given name, e-mail and spend. The id is left empty;
/// services assign one on create.
pub fn create_test_customer(name: &str, email: &str, total_spent: f64) -> Customer {
    Customer {
        id: String::new(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "13900139000".to_string(),
        address: format!("{name} Street"),
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        last_purchase: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        total_spent,
    }
}

/// `n` distinct customers named "Customer 1".."Customer n"
pub fn sample_batch(n: usize) -> Vec<Customer> {
    (1..=n)
        .map(|i| {
            create_test_customer(
                &format!("Customer {i}"),
                &format!("customer{i}@test.com"),
                100.0 * i as f64,
            )
        })
        .collect()
}

/// Assert that a list contains exactly `n` entities.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
