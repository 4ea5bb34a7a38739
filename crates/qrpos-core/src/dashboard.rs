//! # Dashboard Summary
//!
//! The KPI cards on the admin dashboard.
//!
//! ```text
//! revenue  = Σ total (completed orders)
//! today    = Σ total (completed orders dated today, store time)
//! expenses = 30% of revenue        (placeholder until costs are tracked)
//! profit   = revenue − expenses
//! ```

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Order, OrderStatus, Product};

/// Share of revenue booked as expenses, in basis points.
pub const EXPENSE_RATIO_BPS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub todays_sales: Money,
    pub total_orders: usize,
    pub total_revenue: Money,
    pub expenses: Money,
    pub profit: Money,
}

impl DashboardSummary {
    /// Computes the KPIs for `today`, reading order dates in `offset`.
    pub fn compute(
        products: &[Product],
        orders: &[Order],
        today: NaiveDate,
        offset: FixedOffset,
    ) -> Self {
        let completed = || orders.iter().filter(|o| o.status == OrderStatus::Completed);

        let total_revenue: Money = completed().map(|o| o.total).sum();
        let todays_sales: Money = completed()
            .filter(|o| o.date.with_timezone(&offset).date_naive() == today)
            .map(|o| o.total)
            .sum();
        let expenses = total_revenue.percentage(EXPENSE_RATIO_BPS);

        DashboardSummary {
            total_products: products.len(),
            todays_sales,
            total_orders: orders.len(),
            total_revenue,
            expenses,
            profit: total_revenue - expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::{TimeZone, Utc};

    fn bangkok() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn test_fixture_kpis() {
        let summary = DashboardSummary::compute(
            &fixtures::mock_products(),
            &fixtures::mock_orders(),
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            bangkok(),
        );

        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.total_orders, 3);
        // ORD001 1180 + ORD002 640; ORD003 is pending
        assert_eq!(summary.total_revenue, Money::from_major(1820));
        assert_eq!(summary.expenses, Money::from_major(546));
        assert_eq!(summary.profit, Money::from_major(1274));
        assert_eq!(summary.todays_sales, Money::zero());
    }

    #[test]
    fn test_todays_sales_uses_store_offset() {
        let mut orders = fixtures::mock_orders();
        // 18:30 UTC on the 20th is already the 21st in Bangkok
        orders[0].date = Utc.with_ymd_and_hms(2024, 1, 20, 18, 30, 0).unwrap();

        let summary = DashboardSummary::compute(
            &[],
            &orders,
            NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(),
            bangkok(),
        );

        assert_eq!(summary.todays_sales, Money::from_major(1180 + 640));
    }

    #[test]
    fn test_empty() {
        let summary = DashboardSummary::compute(
            &[],
            &[],
            NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(),
            bangkok(),
        );
        assert_eq!(summary.total_revenue, Money::zero());
        assert_eq!(summary.profit, Money::zero());
    }
}
