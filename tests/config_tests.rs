//! Loading a back office from a YAML configuration file

use backoffice::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_backoffice_from_yaml_file() {
    let file = write_config(
        r#"
latency_ms: 0
page_size: 10
seed:
  customers: 4
  invoices: 6
  employees: 0
  rng_seed: 7
"#,
    );

    let config = BackofficeConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let office = Backoffice::seeded_on(&config, today);

    assert_eq!(office.page_size(), 10);
    assert_eq!(office.customers.list().await.unwrap().len(), 4);
    assert_eq!(office.invoices.list().await.unwrap().len(), 6);
    assert!(office.employees.list().await.unwrap().is_empty());
    assert_eq!(office.suppliers.list().await.unwrap().len(), 8);
}

#[test]
fn test_same_seed_same_data() {
    let mut config = BackofficeConfig::for_tests();
    config.seed.rng_seed = Some(1234);
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let a = SeedData::generate(&config.seed, today);
    let b = SeedData::generate(&config.seed, today);
    assert_eq!(a.customers, b.customers);
    assert_eq!(a.invoices, b.invoices);
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let file = write_config("latency_ms: [not, a, number]\n");
    let err = BackofficeConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap_err();
    let err: BackofficeError = err.into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_unsupported_page_size_uses_default() {
    let config = BackofficeConfig::from_yaml_str("latency_ms: 0\npage_size: 3\n").unwrap();
    let office = Backoffice::seeded_on(&config, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    assert_eq!(office.page_size(), 5);

    let page = tokio_test::block_on(office.list_page(&office.customers, &office.query())).unwrap();
    assert_eq!(page.items.len(), 5);
}
