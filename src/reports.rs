//! Financial reports over the fixed monthly sales series

use serde::Serialize;

crate::string_enum!(
    /// Time window of a report
    ReportPeriod {
        /// The last six months
        Monthly = "monthly",
        /// The four quarters of the year
        Quarterly = "quarterly",
        /// All twelve months
        #[default]
        Yearly = "yearly",
    }
);

/// Revenue, expenses and profit for one row of a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodFigures {
    pub label: String,
    pub revenue: u64,
    pub expenses: u64,
    pub profit: u64,
}

impl PeriodFigures {
    /// Profit as a percentage of revenue; 0 when there is no revenue
    pub fn profit_margin(&self) -> f64 {
        if self.revenue == 0 {
            return 0.0;
        }
        self.profit as f64 / self.revenue as f64 * 100.0
    }
}

/// A report: its rows plus column totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub period: ReportPeriod,
    pub rows: Vec<PeriodFigures>,
    pub total_revenue: u64,
    pub total_expenses: u64,
    pub total_profit: u64,
}

/// (label, revenue, expenses, profit) for each month of the year
const MONTHLY_SALES: [(&str, u64, u64, u64); 12] = [
    ("Jan", 45_000, 25_000, 20_000),
    ("Feb", 52_000, 28_000, 24_000),
    ("Mar", 49_000, 27_000, 22_000),
    ("Apr", 63_000, 32_000, 31_000),
    ("May", 58_000, 30_000, 28_000),
    ("Jun", 71_000, 35_000, 36_000),
    ("Jul", 68_000, 34_000, 34_000),
    ("Aug", 75_000, 38_000, 37_000),
    ("Sep", 82_000, 41_000, 41_000),
    ("Oct", 79_000, 39_000, 40_000),
    ("Nov", 88_000, 43_000, 45_000),
    ("Dec", 94_000, 46_000, 48_000),
];

/// The twelve monthly rows
pub fn monthly_sales() -> Vec<PeriodFigures> {
    MONTHLY_SALES
        .iter()
        .map(|&(label, revenue, expenses, profit)| PeriodFigures {
            label: label.to_string(),
            revenue,
            expenses,
            profit,
        })
        .collect()
}

/// Months summed three at a time into Q1..Q4
fn quarterly_sales() -> Vec<PeriodFigures> {
    monthly_sales()
        .chunks(3)
        .enumerate()
        .map(|(q, months)| PeriodFigures {
            label: format!("Q{}", q + 1),
            revenue: months.iter().map(|m| m.revenue).sum(),
            expenses: months.iter().map(|m| m.expenses).sum(),
            profit: months.iter().map(|m| m.profit).sum(),
        })
        .collect()
}

impl Report {
    pub fn for_period(period: ReportPeriod) -> Self {
        let rows = match period {
            ReportPeriod::Monthly => {
                let months = monthly_sales();
                months[months.len() - 6..].to_vec()
            }
            ReportPeriod::Quarterly => quarterly_sales(),
            ReportPeriod::Yearly => monthly_sales(),
        };

        Self {
            period,
            total_revenue: rows.iter().map(|r| r.revenue).sum(),
            total_expenses: rows.iter().map(|r| r.expenses).sum(),
            total_profit: rows.iter().map(|r| r.profit).sum(),
            rows,
        }
    }
}
