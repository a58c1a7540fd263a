//! Single moving average model for weekly demand

use crate::data::WeeklySeries;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastPoint, NextForecast, SeriesForecast};

/// Single Moving Average model.
///
/// The forecast for a week is the mean of the `period` weeks immediately
/// before it in the series. Weeks missing from the series are skipped, so
/// "before" means earlier entries, not earlier calendar weeks.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    /// Name of the model
    name: String,
    /// Window size
    period: usize,
}

impl SimpleMovingAverage {
    /// Create a new Single Moving Average model
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidParameter(
                "Period must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Single Moving Average (period={})", period),
            period,
        })
    }

    /// Mean of the `period` quantities ending just before `end`
    fn window_mean(&self, quantities: &[f64], end: usize) -> f64 {
        let mut sum = 0.0;
        for j in 1..=self.period {
            sum += quantities[end - j];
        }
        sum / self.period as f64
    }
}

impl ForecastModel for SimpleMovingAverage {
    fn forecast_series(&self, series: &WeeklySeries) -> SeriesForecast {
        let quantities = series.quantities();

        let points = series
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if i >= self.period {
                    let forecast = self.window_mean(&quantities, i);
                    ForecastPoint::forecasted(entry.week, entry.quantity, forecast)
                } else {
                    ForecastPoint::observed(entry.week, entry.quantity)
                }
            })
            .collect();

        let forecast = if quantities.len() >= self.period {
            self.window_mean(&quantities, quantities.len())
        } else {
            0.0
        };

        let next_forecast = NextForecast {
            week: series.last_week().map_or(1, |week| week.saturating_add(1)),
            forecast,
        };

        SeriesForecast {
            points,
            next_forecast,
        }
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        &self.name
    }
}
