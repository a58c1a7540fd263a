//! # Sales Prediction
//!
//! Workspace facade over the `sales_forecast` crate.
//!
//! ## Example
//!
//! ```
//! use sales_prediction_workspace::{forecast_ledger, Item, Sale, SalesLedger};
//!
//! let items = vec![Item {
//!     id: "brick".to_string(),
//!     name: "Red Brick".to_string(),
//!     price: 1200.0,
//!     stock: 2000,
//! }];
//! let sales = (1..=4)
//!     .map(|week| Sale {
//!         item_id: "brick".to_string(),
//!         week,
//!         quantity: 10.0 * week as f64,
//!     })
//!     .collect();
//! let ledger = SalesLedger::new(items, sales)?;
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build()?;
//! let (results, summary) = runtime.block_on(forecast_ledger(ledger, 2))?;
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(summary.total_items, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use sales_forecast::data::{Item, Sale};
pub use sales_forecast::*;

/// Forecast every item of a ledger and summarize the batch
pub async fn forecast_ledger(
    ledger: SalesLedger,
    period: usize,
) -> Result<(Vec<ForecastResult>, BatchSummary), ForecastError> {
    let total_items = ledger.items().len();
    let service = ForecastService::new(ledger);

    let results = service.compute_all_forecasts(period).await?;
    let summary = BatchSummary::new(&results, total_items, period);

    Ok((results, summary))
}
