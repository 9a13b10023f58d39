use std::fmt;

use serde::{Deserialize, Serialize};

/// Convert an absolute temperature to Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Display-time conversion. Always fed the canonical Celsius value.
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Unit chosen for display. Values are stored in Celsius regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => to_fahrenheit(celsius),
        }
    }

    /// `"21.50°C"` style rendering with two decimals.
    pub fn format(&self, celsius: f64) -> String {
        format!("{:.2}{}", self.convert(celsius), self.symbol())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: celsius, fahrenheit."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_is_zero_celsius() {
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
    }

    #[test]
    fn fahrenheit_reference_points() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn repeated_conversion_does_not_drift() {
        let canonical = 21.37;
        let first = TemperatureUnit::Fahrenheit.convert(canonical);
        for _ in 0..100 {
            assert_eq!(TemperatureUnit::Fahrenheit.convert(canonical), first);
        }
        assert_eq!(TemperatureUnit::Celsius.convert(canonical), canonical);
    }

    #[test]
    fn format_uses_two_decimals_and_symbol() {
        assert_eq!(TemperatureUnit::Celsius.format(21.456), "21.46°C");
        assert_eq!(TemperatureUnit::Fahrenheit.format(0.0), "32.00°F");
    }

    #[test]
    fn parse_unit_names() {
        assert_eq!(TemperatureUnit::try_from("F").unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::try_from("celsius").unwrap(), TemperatureUnit::Celsius);
        let err = TemperatureUnit::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown temperature unit"));
    }
}
