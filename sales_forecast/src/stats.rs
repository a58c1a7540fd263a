//! Week-over-week sales statistics for the dashboard

use crate::data::SalesLedger;
use crate::utils::format_number;
use serde::Serialize;
use std::collections::HashSet;

/// Percentage change from `previous` to `current`.
///
/// With no previous value the change is 100 if anything happened now and 0
/// otherwise.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

/// Headline numbers for one week compared with the week before
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub current_week: u32,
    pub item_count: usize,
    pub item_change: f64,
    pub current_week_revenue: f64,
    pub sales_change: f64,
    pub current_week_transaction_count: usize,
    pub transaction_change: f64,
}

impl DashboardStats {
    /// Compute statistics for `current_week` from a ledger snapshot.
    ///
    /// Revenue is price times quantity; sales of unknown items add nothing.
    /// The item baseline for the previous week counts items that either sold
    /// in that week or still have stock.
    pub fn compute(ledger: &SalesLedger, current_week: u32) -> Self {
        let previous_week = current_week.saturating_sub(1);

        let (current_week_revenue, current_week_transaction_count) =
            week_totals(ledger, current_week);
        let (previous_week_revenue, previous_week_transaction_count) =
            week_totals(ledger, previous_week);

        let sold_previous_week: HashSet<&str> = ledger
            .sales_in_week(previous_week)
            .map(|(sale, _)| sale.item_id.as_str())
            .collect();
        let previous_week_items = ledger
            .items()
            .iter()
            .filter(|item| sold_previous_week.contains(item.id.as_str()) || item.stock > 0)
            .count();

        let item_count = ledger.items().len();

        Self {
            current_week,
            item_count,
            item_change: percentage_change(item_count as f64, previous_week_items as f64),
            current_week_revenue,
            sales_change: percentage_change(current_week_revenue, previous_week_revenue),
            current_week_transaction_count,
            transaction_change: percentage_change(
                current_week_transaction_count as f64,
                previous_week_transaction_count as f64,
            ),
        }
    }
}

fn week_totals(ledger: &SalesLedger, week: u32) -> (f64, usize) {
    ledger
        .sales_in_week(week)
        .fold((0.0, 0), |(revenue, count), (sale, item)| {
            let price = item.map_or(0.0, |item| item.price);
            (revenue + price * sale.quantity, count + 1)
        })
}

impl std::fmt::Display for DashboardStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dashboard (week {}):", self.current_week)?;
        writeln!(
            f,
            "  Items:         {} ({}%)",
            self.item_count,
            format_number(self.item_change)
        )?;
        writeln!(
            f,
            "  Revenue:       {} ({}%)",
            format_number(self.current_week_revenue),
            format_number(self.sales_change)
        )?;
        writeln!(
            f,
            "  Transactions:  {} ({}%)",
            self.current_week_transaction_count,
            format_number(self.transaction_change)
        )?;
        Ok(())
    }
}
