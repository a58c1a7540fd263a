use approx::assert_relative_eq;
use sales_forecast::metrics::{ErrorMetrics, ReducedMetrics};
use sales_forecast::models::ForecastPoint;

#[test]
fn test_error_metrics() {
    let points = vec![
        ForecastPoint::observed(1, 10.0),
        ForecastPoint::observed(2, 20.0),
        ForecastPoint::forecasted(3, 12.0, 15.0),
        ForecastPoint::forecasted(4, 18.0, 16.0),
        ForecastPoint::forecasted(5, 30.0, 15.0),
    ];

    let metrics = ErrorMetrics::from_points(&points);

    // errors: -3, 2, 15
    assert_relative_eq!(metrics.mad, 20.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.mse, 238.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(metrics.rmse, (238.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(metrics.bias, 14.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(
        metrics.mape,
        (3.0 / 12.0 + 2.0 / 18.0 + 15.0 / 30.0) / 3.0 * 100.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_mape_counts_only_nonzero_actuals() {
    let points = vec![
        ForecastPoint::forecasted(1, 0.0, 2.0),
        ForecastPoint::forecasted(2, 0.0, 4.0),
        ForecastPoint::forecasted(3, 10.0, 8.0),
    ];

    let metrics = ErrorMetrics::from_points(&points);

    // one valid point with APE 0.2
    assert_relative_eq!(metrics.mape, 20.0, epsilon = 1e-12);
    // MAD still averages over all three forecast points
    assert_relative_eq!(metrics.mad, 8.0 / 3.0, epsilon = 1e-12);
    assert!(metrics.mape.is_finite());
}

#[test]
fn test_metrics_without_forecasts() {
    let points = vec![ForecastPoint::observed(1, 3.0)];
    let metrics = ErrorMetrics::from_points(&points);

    assert_eq!(metrics, ErrorMetrics::default());
    assert_eq!(metrics.mape_only(), ReducedMetrics { mape: 0.0 });
}

#[test]
fn test_metrics_display() {
    let metrics = ErrorMetrics {
        mad: 1.0,
        mse: 2.5,
        rmse: 2.5_f64.sqrt(),
        mape: 12.3456,
        bias: -0.25,
    };

    let text = metrics.to_string();

    assert!(text.contains("MAD:   1.00"));
    assert!(text.contains("MAPE:  12.35%"));
    assert!(text.contains("Bias:  -0.25"));
}
