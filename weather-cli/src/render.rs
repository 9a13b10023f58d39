//! Plain-text rendering of normalized weather values.

use weatherwise_core::{
    FiveDaySummary, HourlyChart, TemperatureUnit, WeatherSnapshot, normalize::icon_url,
};

const BAR_WIDTH: usize = 40;

pub fn snapshot(snap: &WeatherSnapshot, unit: TemperatureUnit) -> String {
    format!(
        "{city}, {country}\n\
         {time}\n\
         Temperature: {temp}\n\
         Feels like: {feels}\n\
         Description: {desc}\n\
         Wind Speed: {speed} m/s {dir}\n\
         Pressure: {pressure} hPa\n\
         Humidity: {humidity}%\n\
         Dew Point: {dew}\n\
         Visibility: {visibility}\n\
         Icon: {icon}\n",
        city = snap.city,
        country = snap.country,
        time = snap.local_time,
        temp = unit.format(snap.temperature_c),
        feels = unit.format(snap.feels_like_c),
        desc = snap.description,
        speed = snap.wind_speed_mps,
        dir = snap.wind_direction,
        pressure = snap.pressure_hpa,
        humidity = snap.humidity_pct,
        dew = unit.format(snap.dew_point_c),
        visibility = snap.visibility,
        icon = snap.icon_url,
    )
}

pub fn five_day(summary: &FiveDaySummary, unit: TemperatureUnit) -> String {
    if summary.days.is_empty() {
        return "No forecast days available.\n".to_string();
    }

    summary
        .days
        .iter()
        .map(|day| {
            format!(
                "{} {}  Temp: {}  Description: {}  Icon: {}\n",
                day.day,
                day.month,
                unit.format(day.temperature_c),
                day.description,
                icon_url(&day.icon_id),
            )
        })
        .collect()
}

/// Horizontal bar chart, one row per point.
pub fn chart(chart: &HourlyChart) -> String {
    let mut out = format!("{}\n{} vs {}\n", chart.title, chart.y_label, chart.x_label);

    let Some((lo, hi)) = chart.value_range() else {
        out.push_str("(no data)\n");
        return out;
    };

    for point in &chart.points {
        out.push_str(&format!(
            "{:>8} | {} {:.2}\n",
            point.label,
            "#".repeat(bar_len(point.value, lo, hi)),
            point.value
        ));
    }
    out
}

fn bar_len(value: f64, lo: f64, hi: f64) -> usize {
    if hi - lo < f64::EPSILON {
        return BAR_WIDTH;
    }
    let scaled = (value - lo) / (hi - lo) * (BAR_WIDTH - 1) as f64;
    1 + scaled.round() as usize
}
