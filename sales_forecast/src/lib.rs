//! # Sales Forecast
//!
//! Weekly demand forecasting for store items with the Single Moving Average
//! (SMA) method.
//!
//! ## Features
//!
//! - Weekly series built from raw sales, summing repeated weeks
//! - Per-week SMA forecasts with error, squared error and percentage error
//! - Accuracy metrics (MAD, MSE, RMSE, MAPE, bias)
//! - Batch forecasting for every item of a sales repository, ordered by name
//! - Week-over-week dashboard statistics
//! - CSV loading and layered configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use sales_forecast::data::{Observation, WeeklySeries};
//! use sales_forecast::models::moving_average::SimpleMovingAverage;
//! use sales_forecast::models::{ForecastModel, ForecastResult};
//!
//! let observations = vec![
//!     Observation::new(1, 89.0),
//!     Observation::new(2, 95.0),
//!     Observation::new(3, 85.0),
//!     Observation::new(4, 75.0),
//!     Observation::new(5, 86.0),
//!     Observation::new(6, 100.0),
//! ];
//!
//! let series = WeeklySeries::from_observations(&observations);
//! let model = SimpleMovingAverage::new(3)?;
//! let result = ForecastResult::new("Portland Cement 50kg", 3, model.forecast_series(&series));
//!
//! assert_eq!(result.next_forecast().week, 7);
//! assert_eq!(result.next_forecast().forecast, 87.0);
//! # Ok::<(), sales_forecast::ForecastError>(())
//! ```

pub mod batch;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use crate::batch::{BatchSummary, ForecastService, UNKNOWN_ITEM};
pub use crate::data::{DataLoader, Observation, SalesLedger, WeeklySeries};
pub use crate::error::ForecastError;
pub use crate::metrics::ErrorMetrics;
pub use crate::models::{ForecastModel, ForecastPoint, ForecastResult, NextForecast};
pub use crate::repository::SalesRepository;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
