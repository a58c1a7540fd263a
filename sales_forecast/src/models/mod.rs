//! Forecasting models for weekly sales series

use crate::data::WeeklySeries;
use crate::error::Result;
use crate::metrics::ErrorMetrics;
use crate::utils::format_number;
use serde::Serialize;
use std::fmt::Debug;

/// Percentage errors, only defined when the actual value is non-zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageErrors {
    /// error / actual
    pub percentage_error: f64,
    /// |error| / |actual|
    pub absolute_percentage_error: f64,
}

/// Forecast and the errors derived from it for one week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointErrors {
    pub forecast: f64,
    /// actual - forecast
    pub error: f64,
    pub absolute_error: f64,
    pub error_squared: f64,
    pub percentage: Option<PercentageErrors>,
}

impl PointErrors {
    /// Derive every error transform from an actual value and its forecast
    pub fn new(actual: f64, forecast: f64) -> Self {
        let error = actual - forecast;
        let percentage = if actual != 0.0 {
            Some(PercentageErrors {
                percentage_error: error / actual,
                absolute_percentage_error: error.abs() / actual.abs(),
            })
        } else {
            None
        };

        Self {
            forecast,
            error,
            absolute_error: error.abs(),
            error_squared: error.powi(2),
            percentage,
        }
    }
}

/// One week of a forecast breakdown.
///
/// Forecast-dependent values live together in `errors`, so a point either
/// carries all of them or none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "PointRecord")]
pub struct ForecastPoint {
    pub week: u32,
    pub actual: f64,
    pub errors: Option<PointErrors>,
}

impl ForecastPoint {
    /// A point without enough history for a forecast
    pub fn observed(week: u32, actual: f64) -> Self {
        Self {
            week,
            actual,
            errors: None,
        }
    }

    /// A point with a forecast
    pub fn forecasted(week: u32, actual: f64, forecast: f64) -> Self {
        Self {
            week,
            actual,
            errors: Some(PointErrors::new(actual, forecast)),
        }
    }

    pub fn has_forecast(&self) -> bool {
        self.errors.is_some()
    }

    pub fn forecast(&self) -> Option<f64> {
        self.errors.map(|e| e.forecast)
    }

    pub fn error(&self) -> Option<f64> {
        self.errors.map(|e| e.error)
    }

    pub fn absolute_error(&self) -> Option<f64> {
        self.errors.map(|e| e.absolute_error)
    }

    pub fn error_squared(&self) -> Option<f64> {
        self.errors.map(|e| e.error_squared)
    }

    pub fn percentage_error(&self) -> Option<f64> {
        self.errors
            .and_then(|e| e.percentage)
            .map(|p| p.percentage_error)
    }

    pub fn absolute_percentage_error(&self) -> Option<f64> {
        self.errors
            .and_then(|e| e.percentage)
            .map(|p| p.absolute_percentage_error)
    }
}

/// Forecast for the week after the last observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "PointRecord")]
pub struct NextForecast {
    pub week: u32,
    /// Zero when there is not enough history
    pub forecast: f64,
}

/// Flat wire shape shared by forecast points and the next-period forecast
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PointRecord {
    week: u32,
    actual: f64,
    forecast: Option<f64>,
    error: Option<f64>,
    error_squared: Option<f64>,
    absolute_error: Option<f64>,
    percentage_error: Option<f64>,
    absolute_percentage_error: Option<f64>,
}

impl From<ForecastPoint> for PointRecord {
    fn from(point: ForecastPoint) -> Self {
        Self {
            week: point.week,
            actual: point.actual,
            forecast: point.forecast(),
            error: point.error(),
            error_squared: point.error_squared(),
            absolute_error: point.absolute_error(),
            percentage_error: point.percentage_error(),
            absolute_percentage_error: point.absolute_percentage_error(),
        }
    }
}

impl From<NextForecast> for PointRecord {
    fn from(next: NextForecast) -> Self {
        Self {
            week: next.week,
            actual: 0.0,
            forecast: Some(next.forecast),
            error: None,
            error_squared: None,
            absolute_error: None,
            percentage_error: None,
            absolute_percentage_error: None,
        }
    }
}

/// Output of running a model over one weekly series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesForecast {
    pub points: Vec<ForecastPoint>,
    pub next_forecast: NextForecast,
}

/// Complete forecast breakdown for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    item_name: String,
    period: usize,
    points: Vec<ForecastPoint>,
    next_forecast: NextForecast,
    error_metrics: ErrorMetrics,
}

impl ForecastResult {
    /// Assemble a result, summarizing the point errors
    pub fn new(item_name: impl Into<String>, period: usize, forecast: SeriesForecast) -> Self {
        let error_metrics = ErrorMetrics::from_points(&forecast.points);

        Self {
            item_name: item_name.into(),
            period,
            points: forecast.points,
            next_forecast: forecast.next_forecast,
            error_metrics,
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Per-week breakdown in ascending week order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn next_forecast(&self) -> NextForecast {
        self.next_forecast
    }

    pub fn error_metrics(&self) -> &ErrorMetrics {
        &self.error_metrics
    }

    /// Whether at least one week received a forecast
    pub fn has_forecast(&self) -> bool {
        self.points.iter().any(ForecastPoint::has_forecast)
    }

    /// Serialize the result as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "-".to_string())
}

impl std::fmt::Display for ForecastResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (SMA period {})", self.item_name, self.period)?;
        writeln!(
            f,
            "  {:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "Week", "Actual", "Forecast", "Error", "|Error|", "APE %"
        )?;
        for point in &self.points {
            writeln!(
                f,
                "  {:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
                point.week,
                format_number(point.actual),
                format_optional(point.forecast()),
                format_optional(point.error()),
                format_optional(point.absolute_error()),
                format_optional(point.absolute_percentage_error().map(|ape| ape * 100.0)),
            )?;
        }
        writeln!(
            f,
            "  Next week {}: {}",
            self.next_forecast.week,
            format_number(self.next_forecast.forecast)
        )?;
        write!(f, "{}", self.error_metrics)
    }
}

/// A forecasting model that produces a per-week breakdown for a series
pub trait ForecastModel: Debug {
    /// Forecast every week of the series and the week after it
    fn forecast_series(&self, series: &WeeklySeries) -> SeriesForecast;

    /// Number of trailing weeks the model looks at
    fn period(&self) -> usize;

    /// Name of the model
    fn name(&self) -> &str;
}

pub mod moving_average;
