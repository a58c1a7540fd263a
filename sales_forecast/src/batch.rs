//! Forecasting items one at a time or all together

use crate::data::WeeklySeries;
use crate::error::Result;
use crate::models::moving_average::SimpleMovingAverage;
use crate::models::{ForecastModel, ForecastResult};
use crate::repository::SalesRepository;
use crate::utils::{compare_names, format_number};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Name reported for items the repository does not know
pub const UNKNOWN_ITEM: &str = "Unknown Item";

/// Runs SMA forecasts over the items of a sales repository
#[derive(Debug, Clone)]
pub struct ForecastService<R> {
    repository: R,
}

impl<R: SalesRepository> ForecastService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Forecast a single item.
    ///
    /// An unknown item is not an error: it gets the placeholder name and an
    /// empty series, and a blank stored name gets the placeholder too. Only
    /// repository failures and a zero period are reported.
    pub async fn compute_forecast(&self, item_id: &str, period: usize) -> Result<ForecastResult> {
        let model = SimpleMovingAverage::new(period)?;

        let observations = self.repository.observations(item_id).await?;
        let series = WeeklySeries::from_observations(&observations);
        let forecast = model.forecast_series(&series);

        let item_name = self
            .repository
            .item_name(item_id)
            .await?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_ITEM.to_string());

        Ok(ForecastResult::new(item_name, period, forecast))
    }

    /// Forecast every item with more than `period` weeks of sales.
    ///
    /// Items are computed concurrently. An item whose data cannot be read is
    /// logged and left out; the rest of the batch carries on. Results are
    /// ordered by item name.
    pub async fn compute_all_forecasts(&self, period: usize) -> Result<Vec<ForecastResult>> {
        SimpleMovingAverage::new(period)?;

        let item_ids = self.repository.item_ids().await?;
        let total = item_ids.len();

        let outcomes = join_all(item_ids.iter().map(|item_id| async move {
            (item_id, self.compute_forecast(item_id, period).await)
        }))
        .await;

        let mut results = Vec::with_capacity(total);
        for (item_id, outcome) in outcomes {
            match outcome {
                Ok(result) if is_eligible(&result, period) => results.push(result),
                Ok(result) => {
                    debug!(
                        item_id = %item_id,
                        weeks = result.points().len(),
                        period,
                        "skipping item without enough sales history"
                    );
                }
                Err(err) => {
                    warn!(item_id = %item_id, error = %err, "failed to forecast item");
                }
            }
        }

        results.sort_by(|a, b| compare_names(a.item_name(), b.item_name()));

        info!(
            eligible = results.len(),
            total, period, "computed forecasts for all items"
        );

        Ok(results)
    }
}

/// More than `period` weeks observed and at least one week forecast
fn is_eligible(result: &ForecastResult, period: usize) -> bool {
    result.points().len() > period && result.has_forecast()
}

/// Overview of a batch of forecasts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Items that had enough history to be forecast
    pub eligible_items: usize,
    /// Items known to the repository
    pub total_items: usize,
    pub period: usize,
    /// Mean of the per-item MAPE values, in percent
    pub average_mape: f64,
    /// Sum of every item's next-week forecast
    pub total_next_forecast: f64,
}

impl BatchSummary {
    pub fn new(results: &[ForecastResult], total_items: usize, period: usize) -> Self {
        let average_mape = if results.is_empty() {
            0.0
        } else {
            results
                .iter()
                .map(|r| r.error_metrics().mape)
                .sum::<f64>()
                / results.len() as f64
        };

        let total_next_forecast = results.iter().map(|r| r.next_forecast().forecast).sum();

        Self {
            eligible_items: results.len(),
            total_items,
            period,
            average_mape,
            total_next_forecast,
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Summary:")?;
        writeln!(
            f,
            "  Eligible items:      {} of {} (data >= {} weeks)",
            self.eligible_items,
            self.total_items,
            self.period + 1
        )?;
        writeln!(f, "  Period:              {} weeks", self.period)?;
        writeln!(
            f,
            "  Average MAPE:        {}%",
            format_number(self.average_mape)
        )?;
        writeln!(
            f,
            "  Next week (total):   {}",
            format_number(self.total_next_forecast)
        )?;
        Ok(())
    }
}
