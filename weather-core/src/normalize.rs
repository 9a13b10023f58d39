//! Pure transforms from raw provider payloads to canonical values.
//!
//! Nothing here touches the network or any presentation state. Temperatures
//! leave this module in Celsius; display conversion lives in [`crate::units`].

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Deserialize;

use crate::{
    error::NormalizeError,
    model::{
        Coordinates, DailyEntry, FiveDaySummary, ForecastPoint, ForecastSeries, RawCurrentWeather,
        RawForecastList, Visibility, WeatherSnapshot, WindDirection,
    },
    units::kelvin_to_celsius,
};

pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Sentinel shown when the city's UTC offset is unusable.
pub const TIME_NOT_AVAILABLE: &str = "Time not available";

/// Entries between two five-day samples: 8 × 3h ≈ 24h.
pub const FIVE_DAY_STRIDE: usize = 8;
pub const FIVE_DAY_MAX_DAYS: usize = 5;

const CLOCK_FORMAT: &str = "%I:%M %p";

/// Coarse linear dew-point estimate, not the Magnus formula.
pub fn dew_point(temperature_c: f64, humidity_pct: f64) -> f64 {
    temperature_c - (100.0 - humidity_pct) / 5.0
}

/// Bucket a wind bearing into one of 8 compass points.
///
/// Intervals are half-open; anything not matched (the wrap-around
/// `[337.5, 360) ∪ [0, 22.5)`, out-of-range values, NaN) is north.
pub fn wind_direction(degrees: f64) -> WindDirection {
    if (22.5..67.5).contains(&degrees) {
        WindDirection::NE
    } else if (67.5..112.5).contains(&degrees) {
        WindDirection::E
    } else if (112.5..157.5).contains(&degrees) {
        WindDirection::SE
    } else if (157.5..202.5).contains(&degrees) {
        WindDirection::S
    } else if (202.5..247.5).contains(&degrees) {
        WindDirection::SW
    } else if (247.5..292.5).contains(&degrees) {
        WindDirection::W
    } else if (292.5..337.5).contains(&degrees) {
        WindDirection::NW
    } else {
        WindDirection::N
    }
}

pub fn icon_url(icon_id: &str) -> String {
    format!("{ICON_BASE_URL}/{icon_id}@2x.png")
}

/// Wall-clock time at a UTC offset, 12-hour clock with AM/PM.
///
/// Returns [`TIME_NOT_AVAILABLE`] when the offset is missing or out of range.
pub fn local_time(now: DateTime<Utc>, utc_offset_secs: Option<i64>) -> String {
    match utc_offset_secs.and_then(fixed_offset) {
        Some(offset) => now.with_timezone(&offset).format(CLOCK_FORMAT).to_string(),
        None => TIME_NOT_AVAILABLE.to_string(),
    }
}

/// Chart tick label for a forecast timestamp.
pub fn format_timestamp(ts: DateTime<Utc>, utc_offset_secs: i32) -> String {
    let offset = FixedOffset::east_opt(utc_offset_secs).unwrap_or_else(|| Utc.fix());
    ts.with_timezone(&offset).format(CLOCK_FORMAT).to_string()
}

pub fn normalize_current(raw: &RawCurrentWeather) -> Result<WeatherSnapshot, NormalizeError> {
    normalize_current_at(raw, Utc::now())
}

/// Same as [`normalize_current`] with an explicit "now" for the local time field.
pub fn normalize_current_at(
    raw: &RawCurrentWeather,
    now: DateTime<Utc>,
) -> Result<WeatherSnapshot, NormalizeError> {
    let parsed = OwCurrentResponse::deserialize(&raw.0)?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| NormalizeError::MalformedResponse("`weather` list is empty".into()))?;

    let temperature_c = kelvin_to_celsius(parsed.main.temp);
    let feels_like_c = kelvin_to_celsius(parsed.main.feels_like);

    Ok(WeatherSnapshot {
        city: parsed.name,
        country: parsed.sys.country,
        temperature_c,
        feels_like_c,
        description: condition.description.clone(),
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        wind_speed_mps: parsed.wind.speed,
        wind_degrees: parsed.wind.deg,
        wind_direction: wind_direction(parsed.wind.deg),
        dew_point_c: dew_point(temperature_c, f64::from(parsed.main.humidity)),
        visibility: parsed.visibility.map_or(Visibility::Unknown, Visibility::Meters),
        icon_url: icon_url(&condition.icon),
        coordinates: Coordinates { lat: parsed.coord.lat, lon: parsed.coord.lon },
        local_time: local_time(now, parsed.timezone),
    })
}

/// Every forecast entry converted to Celsius, in provider order.
pub fn normalize_forecast(raw: &RawForecastList) -> Result<ForecastSeries, NormalizeError> {
    let parsed = OwForecastResponse::deserialize(&raw.0)?;
    let utc_offset_secs = parsed.utc_offset_secs();

    let points = parsed
        .list
        .iter()
        .map(|entry| {
            Ok(ForecastPoint {
                timestamp: unix_to_utc(entry.dt)?,
                temperature_c: kelvin_to_celsius(entry.main.temp),
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    Ok(ForecastSeries { points, utc_offset_secs })
}

/// Every 8th entry, at most five; a short horizon yields fewer days.
pub fn normalize_five_day(raw: &RawForecastList) -> Result<FiveDaySummary, NormalizeError> {
    let parsed = OwForecastResponse::deserialize(&raw.0)?;
    let offset = FixedOffset::east_opt(parsed.utc_offset_secs()).unwrap_or_else(|| Utc.fix());

    let days = parsed
        .list
        .iter()
        .step_by(FIVE_DAY_STRIDE)
        .take(FIVE_DAY_MAX_DAYS)
        .map(|entry| {
            let local = unix_to_utc(entry.dt)?.with_timezone(&offset);
            let condition = entry.weather.first().ok_or_else(|| {
                NormalizeError::MalformedResponse(format!(
                    "forecast entry at {} has no `weather` data",
                    entry.dt
                ))
            })?;

            Ok(DailyEntry {
                day: local.format("%d").to_string(),
                month: local.format("%b").to_string(),
                icon_id: condition.icon.clone(),
                temperature_c: kelvin_to_celsius(entry.main.temp),
                description: condition.description.clone(),
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    Ok(FiveDaySummary { days })
}

fn fixed_offset(secs: i64) -> Option<FixedOffset> {
    i32::try_from(secs).ok().and_then(FixedOffset::east_opt)
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>, NormalizeError> {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .ok_or_else(|| NormalizeError::MalformedResponse(format!("timestamp {ts} out of range")))
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    visibility: Option<u32>,
    timezone: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    timezone: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
    city: Option<OwCity>,
}

impl OwForecastResponse {
    fn utc_offset_secs(&self) -> i32 {
        self.city
            .as_ref()
            .and_then(|c| c.timezone)
            .and_then(fixed_offset)
            .map_or(0, |o| o.local_minus_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn current_payload() -> serde_json::Value {
        json!({
            "coord": { "lon": -0.1257, "lat": 51.5085 },
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
            "main": {
                "temp": 293.15,
                "feels_like": 292.65,
                "pressure": 1012,
                "humidity": 50
            },
            "visibility": 10000,
            "wind": { "speed": 4.12, "deg": 250 },
            "sys": { "country": "GB" },
            "timezone": 3600,
            "name": "London",
            "cod": 200
        })
    }

    fn forecast_payload(entries: usize) -> serde_json::Value {
        let start = 1_700_000_000_i64;
        let list: Vec<_> = (0..entries)
            .map(|i| {
                json!({
                    "dt": start + i as i64 * 3 * 3600,
                    "main": { "temp": 273.15 + i as f64 },
                    "weather": [{ "icon": format!("{i:02}d"), "description": format!("entry {i}") }]
                })
            })
            .collect();
        json!({ "cod": "200", "list": list, "city": { "name": "London", "timezone": 0 } })
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn dew_point_linear_estimate() {
        assert_eq!(dew_point(20.0, 50.0), 10.0);
        assert_eq!(dew_point(15.0, 100.0), 15.0);
    }

    #[test]
    fn wind_direction_interval_table() {
        let cases = [
            (0.0, WindDirection::N),
            (22.4999, WindDirection::N),
            (22.5, WindDirection::NE),
            (67.5, WindDirection::E),
            (112.5, WindDirection::SE),
            (157.5, WindDirection::S),
            (180.0, WindDirection::S),
            (202.5, WindDirection::SW),
            (247.5, WindDirection::W),
            (292.5, WindDirection::NW),
            (337.4999, WindDirection::NW),
            (337.5, WindDirection::N),
            (359.9, WindDirection::N),
        ];
        for (deg, expected) in cases {
            assert_eq!(wind_direction(deg), expected, "degrees = {deg}");
        }
    }

    #[test]
    fn wind_direction_is_piecewise_constant_over_the_circle() {
        let mut deg = 0.0;
        while deg < 360.0 {
            let expected = match deg {
                d if (22.5..67.5).contains(&d) => "NE",
                d if (67.5..112.5).contains(&d) => "E",
                d if (112.5..157.5).contains(&d) => "SE",
                d if (157.5..202.5).contains(&d) => "S",
                d if (202.5..247.5).contains(&d) => "SW",
                d if (247.5..292.5).contains(&d) => "W",
                d if (292.5..337.5).contains(&d) => "NW",
                _ => "N",
            };
            assert_eq!(wind_direction(deg).as_str(), expected, "degrees = {deg}");
            deg += 0.5;
        }
    }

    #[test]
    fn wind_direction_out_of_range_falls_to_north() {
        assert_eq!(wind_direction(-10.0), WindDirection::N);
        assert_eq!(wind_direction(400.0), WindDirection::N);
        assert_eq!(wind_direction(f64::NAN), WindDirection::N);
    }

    #[test]
    fn local_time_applies_offset() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 13, 7, 0).unwrap();
        assert_eq!(local_time(now, Some(3600)), "02:07 PM");
        assert_eq!(local_time(now, Some(-5 * 3600)), "08:07 AM");
    }

    #[test]
    fn local_time_sentinel_on_missing_or_bad_offset() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 13, 7, 0).unwrap();
        assert_eq!(local_time(now, None), TIME_NOT_AVAILABLE);
        assert_eq!(local_time(now, Some(i64::MAX)), TIME_NOT_AVAILABLE);
        assert_eq!(local_time(now, Some(200_000)), TIME_NOT_AVAILABLE);
    }

    #[test]
    fn normalize_current_converts_and_derives() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 23, 30, 0).unwrap();
        let snap = normalize_current_at(&RawCurrentWeather(current_payload()), now).unwrap();

        assert_eq!(snap.city, "London");
        assert_eq!(snap.country, "GB");
        assert!(approx(snap.temperature_c, 20.0));
        assert!(approx(snap.feels_like_c, 19.5));
        assert!(approx(snap.dew_point_c, 10.0));
        assert_eq!(snap.humidity_pct, 50);
        assert_eq!(snap.pressure_hpa, 1012);
        assert_eq!(snap.wind_direction, WindDirection::W);
        assert_eq!(snap.visibility, Visibility::Meters(10000));
        assert_eq!(snap.icon_url, "https://openweathermap.org/img/wn/10d@2x.png");
        assert_eq!(snap.coordinates, Coordinates { lat: 51.5085, lon: -0.1257 });
        assert_eq!(snap.local_time, "12:30 AM");
    }

    #[test]
    fn normalize_current_without_visibility_or_timezone() {
        let mut payload = current_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.remove("visibility");
        obj.remove("timezone");

        let snap = normalize_current(&RawCurrentWeather(payload)).unwrap();
        assert_eq!(snap.visibility, Visibility::Unknown);
        assert_eq!(snap.local_time, TIME_NOT_AVAILABLE);
    }

    #[test]
    fn normalize_current_missing_weather_is_malformed() {
        let mut payload = current_payload();
        payload.as_object_mut().unwrap().remove("weather");

        let err = normalize_current(&RawCurrentWeather(payload)).unwrap_err();
        let NormalizeError::MalformedResponse(msg) = err;
        assert!(msg.contains("weather"), "unexpected message: {msg}");
    }

    #[test]
    fn normalize_current_empty_weather_is_malformed() {
        let mut payload = current_payload();
        payload["weather"] = json!([]);

        let err = normalize_current(&RawCurrentWeather(payload)).unwrap_err();
        assert!(matches!(err, NormalizeError::MalformedResponse(_)));
    }

    #[test]
    fn normalize_current_rejects_non_object() {
        let err = normalize_current(&RawCurrentWeather(json!("nope"))).unwrap_err();
        assert!(matches!(err, NormalizeError::MalformedResponse(_)));
    }

    #[test]
    fn normalize_forecast_keeps_provider_order() {
        let mut payload = forecast_payload(3);
        // Out-of-order timestamps stay where the provider put them.
        payload["list"][0]["dt"] = json!(1_800_000_000_i64);

        let series = normalize_forecast(&RawForecastList(payload)).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points[0].timestamp.timestamp(), 1_800_000_000);
        assert!(approx(series.points[0].temperature_c, 0.0));
        assert!(approx(series.points[2].temperature_c, 2.0));
        assert_eq!(series.utc_offset_secs, 0);
    }

    #[test]
    fn normalize_forecast_missing_list_is_malformed() {
        let err = normalize_forecast(&RawForecastList(json!({ "cod": "200" }))).unwrap_err();
        assert!(matches!(err, NormalizeError::MalformedResponse(_)));
    }

    #[test]
    fn five_day_samples_every_eighth_entry() {
        let summary = normalize_five_day(&RawForecastList(forecast_payload(40))).unwrap();

        let picked: Vec<_> = summary.days.iter().map(|d| d.description.as_str()).collect();
        assert_eq!(picked, ["entry 0", "entry 8", "entry 16", "entry 24", "entry 32"]);
        assert!(approx(summary.days[1].temperature_c, 8.0));
        assert_eq!(summary.days[2].icon_id, "16d");
    }

    #[test]
    fn five_day_short_horizon_returns_subset() {
        let summary = normalize_five_day(&RawForecastList(forecast_payload(17))).unwrap();
        assert_eq!(summary.days.len(), 3);

        let summary = normalize_five_day(&RawForecastList(forecast_payload(0))).unwrap();
        assert!(summary.days.is_empty());
    }

    #[test]
    fn five_day_formats_day_and_month_in_city_time() {
        // 2023-11-14T22:13:20Z; +3h lands on the 15th.
        let mut payload = forecast_payload(1);
        payload["city"]["timezone"] = json!(3 * 3600);

        let summary = normalize_five_day(&RawForecastList(payload)).unwrap();
        assert_eq!(summary.days[0].day, "15");
        assert_eq!(summary.days[0].month, "Nov");
    }

    #[test]
    fn format_timestamp_twelve_hour_clock() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts, 0), "03:00 PM");
        assert_eq!(format_timestamp(ts, -3 * 3600), "12:00 PM");
    }
}
