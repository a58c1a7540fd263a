//! Sales records and weekly series handling for forecasting

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A single sales observation for one item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Week number, starting at 1
    pub week: u32,
    /// Quantity sold
    pub quantity: f64,
}

impl Observation {
    pub fn new(week: u32, quantity: f64) -> Self {
        Self { week, quantity }
    }
}

/// Total quantity sold in one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyQuantity {
    pub week: u32,
    pub quantity: f64,
}

/// Per-week sales of one item, strictly increasing by week
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklySeries {
    entries: Vec<WeeklyQuantity>,
}

impl WeeklySeries {
    /// Collapse observations into one entry per week.
    ///
    /// Observations for the same week are summed. Weeks without any
    /// observation are left out rather than filled with zero.
    pub fn from_observations<'a, I>(observations: I) -> Self
    where
        I: IntoIterator<Item = &'a Observation>,
    {
        let mut by_week: BTreeMap<u32, f64> = BTreeMap::new();
        for observation in observations {
            *by_week.entry(observation.week).or_insert(0.0) += observation.quantity;
        }

        let entries = by_week
            .into_iter()
            .map(|(week, quantity)| WeeklyQuantity { week, quantity })
            .collect();

        Self { entries }
    }

    /// Entries in ascending week order
    pub fn entries(&self) -> &[WeeklyQuantity] {
        &self.entries
    }

    /// Quantities in ascending week order
    pub fn quantities(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.quantity).collect()
    }

    /// Last observed week, if any
    pub fn last_week(&self) -> Option<u32> {
        self.entries.last().map(|e| e.week)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An item tracked by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units currently in stock
    pub stock: u32,
}

/// A recorded sale of one item in one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub item_id: String,
    pub week: u32,
    pub quantity: f64,
}

impl From<&Sale> for Observation {
    fn from(sale: &Sale) -> Self {
        Observation::new(sale.week, sale.quantity)
    }
}

/// Snapshot of items and their sales
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    items: Vec<Item>,
    sales: Vec<Sale>,
}

impl SalesLedger {
    /// Create a ledger, checking that every sale is well formed
    pub fn new(items: Vec<Item>, sales: Vec<Sale>) -> Result<Self> {
        for (i, sale) in sales.iter().enumerate() {
            validate_sale(sale).map_err(|msg| {
                ForecastError::ValidationError(format!("Sale #{}: {}", i + 1, msg))
            })?;
        }

        Ok(Self { items, sales })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Look up an item by id
    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// All observations recorded for one item
    pub fn observations_for(&self, item_id: &str) -> Vec<Observation> {
        self.sales
            .iter()
            .filter(|sale| sale.item_id == item_id)
            .map(Observation::from)
            .collect()
    }

    /// Sales recorded in the given week, paired with their item when known
    pub fn sales_in_week(&self, week: u32) -> impl Iterator<Item = (&Sale, Option<&Item>)> {
        self.sales
            .iter()
            .filter(move |sale| sale.week == week)
            .map(move |sale| (sale, self.item(&sale.item_id)))
    }
}

fn validate_sale(sale: &Sale) -> std::result::Result<(), String> {
    if sale.week == 0 {
        return Err(format!("week must be at least 1 (item {})", sale.item_id));
    }
    if !sale.quantity.is_finite() || sale.quantity < 0.0 {
        return Err(format!(
            "quantity must be a non-negative number, got {} (item {})",
            sale.quantity, sale.item_id
        ));
    }
    Ok(())
}

/// Data loader for sales ledgers stored as CSV
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a ledger from an items CSV and a sales CSV.
    ///
    /// Expected headers:
    /// `id,name,price,stock` and `item_id,week,quantity`
    pub fn from_csv<P: AsRef<Path>, Q: AsRef<Path>>(
        items_path: P,
        sales_path: Q,
    ) -> Result<SalesLedger> {
        let items = Self::read_items(items_path)?;
        let sales = Self::read_sales(sales_path)?;

        Ok(SalesLedger { items, sales })
    }

    /// Read item rows from a CSV file
    pub fn read_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut items = Vec::new();
        for (i, row) in reader.deserialize::<Item>().enumerate() {
            let item = row.map_err(|e| {
                ForecastError::CsvError(format!("Invalid item at line {}: {}", i + 2, e))
            })?;
            items.push(item);
        }

        Ok(items)
    }

    /// Read sale rows from a CSV file, rejecting malformed sales
    pub fn read_sales<P: AsRef<Path>>(path: P) -> Result<Vec<Sale>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut sales = Vec::new();
        for (i, row) in reader.deserialize::<Sale>().enumerate() {
            let sale = row.map_err(|e| {
                ForecastError::CsvError(format!("Invalid sale at line {}: {}", i + 2, e))
            })?;
            validate_sale(&sale).map_err(|msg| {
                ForecastError::ValidationError(format!("Invalid sale at line {}: {}", i + 2, msg))
            })?;
            sales.push(sale);
        }

        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_weeks_are_summed() {
        let observations = vec![
            Observation::new(5, 3.0),
            Observation::new(2, 1.0),
            Observation::new(5, 4.0),
        ];

        let series = WeeklySeries::from_observations(&observations);

        assert_eq!(
            series.entries(),
            &[
                WeeklyQuantity { week: 2, quantity: 1.0 },
                WeeklyQuantity { week: 5, quantity: 7.0 },
            ]
        );
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let observations = vec![Observation::new(1, 10.0), Observation::new(4, 20.0)];
        let series = WeeklySeries::from_observations(&observations);

        assert_eq!(series.len(), 2);
        assert_eq!(series.last_week(), Some(4));
    }

    #[test]
    fn test_empty_observations() {
        let series = WeeklySeries::from_observations(&Vec::<Observation>::new());
        assert!(series.is_empty());
        assert_eq!(series.last_week(), None);
    }

    #[test]
    fn test_ledger_rejects_week_zero() {
        let sales = vec![Sale {
            item_id: "a".to_string(),
            week: 0,
            quantity: 1.0,
        }];

        let result = SalesLedger::new(Vec::new(), sales);
        assert!(matches!(result, Err(ForecastError::ValidationError(_))));
    }

    #[test]
    fn test_ledger_rejects_negative_quantity() {
        let sales = vec![Sale {
            item_id: "a".to_string(),
            week: 3,
            quantity: -2.0,
        }];

        assert!(SalesLedger::new(Vec::new(), sales).is_err());
    }
}
