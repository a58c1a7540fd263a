//! Metrics for evaluating forecast accuracy

use crate::models::ForecastPoint;
use serde::Serialize;

/// Forecast accuracy metrics over the weeks that received a forecast
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ErrorMetrics {
    /// Mean Absolute Deviation
    #[serde(rename = "MAD")]
    pub mad: f64,
    /// Mean Squared Error
    #[serde(rename = "MSE")]
    pub mse: f64,
    /// Root Mean Squared Error
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percent
    #[serde(rename = "MAPE")]
    pub mape: f64,
    /// Mean signed error
    pub bias: f64,
}

/// MAPE-only view of [`ErrorMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReducedMetrics {
    #[serde(rename = "MAPE")]
    pub mape: f64,
}

impl ErrorMetrics {
    /// Summarize point errors.
    ///
    /// Points without a forecast are ignored. MAPE additionally ignores points
    /// whose actual value is zero. Every metric is zero when nothing is left
    /// to average.
    pub fn from_points(points: &[ForecastPoint]) -> Self {
        let mut sum_abs_error = 0.0;
        let mut sum_error = 0.0;
        let mut sum_squared_error = 0.0;
        let mut sum_abs_percentage_error = 0.0;
        let mut count_with_forecast = 0usize;
        let mut count_valid_mape = 0usize;

        for errors in points.iter().filter_map(|p| p.errors) {
            sum_abs_error += errors.absolute_error;
            sum_error += errors.error;
            sum_squared_error += errors.error_squared;
            count_with_forecast += 1;

            if let Some(percentage) = errors.percentage {
                sum_abs_percentage_error += percentage.absolute_percentage_error;
                count_valid_mape += 1;
            }
        }

        if count_with_forecast == 0 {
            return Self::default();
        }

        let n = count_with_forecast as f64;
        let mse = sum_squared_error / n;
        let mape = if count_valid_mape > 0 {
            sum_abs_percentage_error / count_valid_mape as f64 * 100.0
        } else {
            0.0
        };

        Self {
            mad: sum_abs_error / n,
            mse,
            rmse: mse.sqrt(),
            mape,
            bias: sum_error / n,
        }
    }

    /// Project onto MAPE only
    pub fn mape_only(&self) -> ReducedMetrics {
        ReducedMetrics { mape: self.mape }
    }
}

impl std::fmt::Display for ErrorMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Error Metrics:")?;
        writeln!(f, "  MAD:   {:.2}", self.mad)?;
        writeln!(f, "  MSE:   {:.2}", self.mse)?;
        writeln!(f, "  RMSE:  {:.2}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.2}%", self.mape)?;
        writeln!(f, "  Bias:  {:.2}", self.bias)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_forecast_points_give_zero_metrics() {
        let points = vec![
            ForecastPoint::observed(1, 10.0),
            ForecastPoint::observed(2, 12.0),
        ];

        assert_eq!(ErrorMetrics::from_points(&points), ErrorMetrics::default());
    }

    #[test]
    fn test_zero_actual_excluded_from_mape_only() {
        let points = vec![
            ForecastPoint::observed(1, 10.0),
            ForecastPoint::forecasted(2, 0.0, 10.0),
            ForecastPoint::forecasted(3, 20.0, 10.0),
        ];

        let metrics = ErrorMetrics::from_points(&points);

        // errors: -10 and +10
        assert_relative_eq!(metrics.mad, 10.0);
        assert_relative_eq!(metrics.mse, 100.0);
        assert_relative_eq!(metrics.rmse, 10.0);
        assert_relative_eq!(metrics.bias, 0.0);
        assert_relative_eq!(metrics.mape, 50.0);
    }

    #[test]
    fn test_all_zero_actuals_give_zero_mape() {
        let points = vec![ForecastPoint::forecasted(4, 0.0, 3.0)];
        let metrics = ErrorMetrics::from_points(&points);

        assert_eq!(metrics.mape, 0.0);
        assert_relative_eq!(metrics.mad, 3.0);
    }

    #[test]
    fn test_mape_only_projection() {
        let metrics = ErrorMetrics {
            mad: 1.0,
            mse: 2.0,
            rmse: 2.0_f64.sqrt(),
            mape: 12.5,
            bias: -0.5,
        };

        assert_eq!(metrics.mape_only(), ReducedMetrics { mape: 12.5 });
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_value(ErrorMetrics::default()).unwrap();

        for key in ["MAD", "MSE", "RMSE", "MAPE", "bias"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
