//! Back office dashboard demo
//!
//! Seeds a back office, then prints the dashboard summary, the first page of
//! invoices and the yearly report.
//!
//! ```text
//! cargo run --example dashboard [config.yaml]
//! RUST_LOG=backoffice=debug cargo run --example dashboard
//! ```

use anyhow::Result;
use backoffice::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("backoffice=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BackofficeConfig::from_yaml_file(&path)?,
        None => BackofficeConfig {
            latency_ms: 50,
            ..BackofficeConfig::default()
        },
    };

    let office = Backoffice::new(&config);

    let summary = office.dashboard().await?;
    println!("\n📊 Dashboard");
    println!("  Customers:         {}", summary.customers);
    println!("  Employees:         {}", summary.employees);
    println!("  Suppliers:         {}", summary.suppliers);
    println!(
        "  Pending invoices:  {} ({:.2} outstanding)",
        summary.pending_invoices, summary.outstanding_amount
    );
    println!("  Revenue:           {:.2}", summary.revenue);
    println!("  Expenses:          {}", summary.total_expenses);
    println!("\n  Top customers:");
    for customer in &summary.top_customers {
        println!("    {:<24} {:>12.2}", customer.name, customer.total_spent);
    }

    let page = office.list_page(&office.invoices, &office.query()).await?;
    println!("\n🧾 Invoices");
    for invoice in &page.items {
        println!(
            "  {}  {:<24} {:>10.2}  {}",
            invoice.id, invoice.customer_name, invoice.total_amount, invoice.status
        );
    }
    if let Some((first, last)) = page.pagination.row_span() {
        println!(
            "  {}-{} of {} (page {}/{})",
            first, last, page.pagination.total, page.pagination.page, page.pagination.total_pages
        );
    }

    let report = Report::for_period(ReportPeriod::Yearly);
    println!("\n📈 {} report", report.period);
    for row in &report.rows {
        println!(
            "  {:<4} {:>8} {:>8} {:>8} {:>6.1}%",
            row.label,
            row.revenue,
            row.expenses,
            row.profit,
            row.profit_margin()
        );
    }
    println!(
        "  {:<4} {:>8} {:>8} {:>8}",
        "Σ", report.total_revenue, report.total_expenses, report.total_profit
    );

    Ok(())
}
