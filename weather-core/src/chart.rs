//! Data behind the hourly temperature chart.

use serde::Serialize;

use crate::{model::ForecastSeries, normalize::format_timestamp, units::TemperatureUnit};

/// Points plotted on the chart. The provider steps are 3 hours, so 8 points span a day.
pub const HOURLY_CHART_POINTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub unit: TemperatureUnit,
    pub points: Vec<ChartPoint>,
}

impl HourlyChart {
    pub fn from_series(
        city: &str,
        country: &str,
        series: &ForecastSeries,
        unit: TemperatureUnit,
    ) -> Self {
        let points = series
            .points
            .iter()
            .take(HOURLY_CHART_POINTS)
            .map(|p| ChartPoint {
                label: format_timestamp(p.timestamp, series.utc_offset_secs),
                value: unit.convert(p.temperature_c),
            })
            .collect();

        Self {
            title: format!("Hourly Temperature Forecast for {city}, {country}"),
            x_label: "Time 24 hours from now (AM/PM)".to_string(),
            y_label: format!("Temperature ({})", unit.symbol()),
            unit,
            points,
        }
    }

    /// `(min, max)` of the plotted values, `None` for an empty chart.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.value).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
