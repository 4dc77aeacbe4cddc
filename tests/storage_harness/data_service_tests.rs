//! Macro-generated test suite for `DataService<Customer>` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that validates
//! any `DataService<Customer>` implementation against the full contract:
//! CRUD, shallow-merge updates, exact-value search and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use backoffice::storage::InMemoryDataService;
//!
//! data_service_tests!(InMemoryDataService::<Customer>::new());
//! ```

/// Generate a full `DataService<Customer>` conformance test suite.
///
/// `$factory` must evaluate to an empty service implementing
/// `DataService<Customer>`. It is re-evaluated for each test. For the
/// concurrent access test the service must also be `Clone + 'static`.
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use backoffice::core::entity::Entity;
            use backoffice::core::service::{DataService, patch};
            use serde_json::json;
            use std::collections::HashSet;

            // ==================================================================
            // Create
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let service = $factory;
                let created = service
                    .create(create_test_customer("Alice", "alice@test.com", 250.0))
                    .await
                    .unwrap();

                assert_eq!(created.id().len(), 9);
                assert_eq!(created.name, "Alice");

                let retrieved = service.get(&created.id).await.unwrap();
                assert_eq!(retrieved, Some(created));
            }

            #[tokio::test]
            async fn test_create_assigns_unique_ids_and_appends_one() {
                let service = $factory;
                let mut ids = HashSet::new();

                for (n, customer) in sample_batch(20).into_iter().enumerate() {
                    let created = service.create(customer).await.unwrap();
                    assert!(ids.insert(created.id.clone()), "duplicate id {}", created.id);
                    assert_count(&service.list().await.unwrap(), n + 1);
                }
            }

            #[tokio::test]
            async fn test_create_blank_required_field_is_rejected() {
                let service = $factory;
                let err = service
                    .create(create_test_customer("  ", "nobody@test.com", 0.0))
                    .await
                    .unwrap_err();

                assert_eq!(err.error_code(), "VALIDATION_ERROR");
                assert!(service.list().await.unwrap().is_empty());
            }

            // ==================================================================
            // Read
            // ==================================================================

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                let result = service.get("zzzzzzzzz").await.unwrap();
                assert!(result.is_none(), "Getting a nonexistent entity should return None");
            }

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;
                assert!(service.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_keeps_insertion_order() {
                let service = $factory;
                for customer in sample_batch(5) {
                    service.create(customer).await.unwrap();
                }

                let names: Vec<_> = service
                    .list()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|c| c.name)
                    .collect();
                assert_eq!(
                    names,
                    vec!["Customer 1", "Customer 2", "Customer 3", "Customer 4", "Customer 5"]
                );
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_merges_only_supplied_fields() {
                let service = $factory;
                let created = service
                    .create(create_test_customer("Alice", "alice@test.com", 250.0))
                    .await
                    .unwrap();

                let updated = service
                    .update(
                        &created.id,
                        patch(json!({"email": "alice@new.com", "totalSpent": 300.5})),
                    )
                    .await
                    .unwrap()
                    .expect("existing record");

                assert_eq!(updated.email, "alice@new.com");
                assert!(approx_eq(updated.total_spent, 300.5));
                assert_eq!(updated.name, created.name);
                assert_eq!(updated.phone, created.phone);
                assert_eq!(updated.address, created.address);
                assert_eq!(updated.created_at, created.created_at);

                let retrieved = service.get(&created.id).await.unwrap().unwrap();
                assert_eq!(retrieved, updated);
            }

            #[tokio::test]
            async fn test_update_nonexistent_returns_none() {
                let service = $factory;
                service
                    .create(create_test_customer("Alice", "alice@test.com", 1.0))
                    .await
                    .unwrap();

                let result = service
                    .update("zzzzzzzzz", patch(json!({"name": "Ghost"})))
                    .await
                    .unwrap();
                assert!(result.is_none());
                assert_eq!(service.list().await.unwrap()[0].name, "Alice");
            }

            #[tokio::test]
            async fn test_update_unknown_field_is_rejected() {
                let service = $factory;
                let created = service
                    .create(create_test_customer("Alice", "alice@test.com", 1.0))
                    .await
                    .unwrap();

                let err = service
                    .update(&created.id, patch(json!({"favouriteColour": "blue"})))
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "INVALID_PATCH");
            }

            #[tokio::test]
            async fn test_update_blank_required_field_is_rejected() {
                let service = $factory;
                let created = service
                    .create(create_test_customer("Alice", "alice@test.com", 1.0))
                    .await
                    .unwrap();

                let err = service
                    .update(&created.id, patch(json!({"name": ""})))
                    .await
                    .unwrap_err();
                assert_eq!(err.error_code(), "VALIDATION_ERROR");
                assert_eq!(service.get(&created.id).await.unwrap(), Some(created));
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_removes_exactly_the_target() {
                let service = $factory;
                let mut created = Vec::new();
                for customer in sample_batch(4) {
                    created.push(service.create(customer).await.unwrap());
                }

                assert!(service.delete(&created[1].id).await.unwrap());

                let remaining = service.list().await.unwrap();
                assert_eq!(remaining, vec![created[0].clone(), created[2].clone(), created[3].clone()]);
            }

            #[tokio::test]
            async fn test_delete_nonexistent_returns_false() {
                let service = $factory;
                service.create(sample_batch(1).remove(0)).await.unwrap();

                assert!(!service.delete("zzzzzzzzz").await.unwrap());
                assert_count(&service.list().await.unwrap(), 1);
            }

            // ==================================================================
            // Search
            // ==================================================================

            #[tokio::test]
            async fn test_search_string_field() {
                let service = $factory;
                for customer in sample_batch(3) {
                    service.create(customer).await.unwrap();
                }

                let found = service.search("email", "customer2@test.com").await.unwrap();
                assert_count(&found, 1);
                assert_eq!(found[0].name, "Customer 2");
            }

            #[tokio::test]
            async fn test_search_float_field() {
                let service = $factory;
                for customer in sample_batch(3) {
                    service.create(customer).await.unwrap();
                }

                let found = service.search("total_spent", "300").await.unwrap();
                assert_count(&found, 1);
                assert_eq!(found[0].name, "Customer 3");
            }

            #[tokio::test]
            async fn test_search_unknown_field() {
                let service = $factory;
                service.create(sample_batch(1).remove(0)).await.unwrap();

                assert!(service.search("shoe_size", "42").await.unwrap().is_empty());
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                let service = $factory;
                let mut handles = Vec::new();

                for customer in sample_batch(10) {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service.create(customer).await.unwrap()
                    }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    ids.insert(handle.await.unwrap().id);
                }

                assert_eq!(ids.len(), 10);
                assert_count(&service.list().await.unwrap(), 10);
            }
        }
    };
}
