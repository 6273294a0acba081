//! Forecast series value objects

use serde::Deserialize;

/// Forecast series for one company and metric
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSeries {
    pub ticker: String,
    pub metric: String,
    pub forecasts: Vec<ForecastPoint>,
}

/// One forecast data point. Confidence bounds may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    pub value: f64,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}
