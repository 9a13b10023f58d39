//! Standalone Leaflet page showing the wind direction around a city.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::model::{Coordinates, WindDirection};

pub const ZOOM: u8 = 11;
pub const ARROW_COUNT: usize = 5;
pub const ARROW_SIZE_PX: u32 = 50;

/// First arrow sits this far south-west of the city, in degrees.
const ARROW_START_OFFSET: f64 = 0.05;
const ARROW_STEP: f64 = 0.03;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

fn arrow_icon_url(direction: WindDirection) -> &'static str {
    match direction {
        WindDirection::N => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-23-1024.png",
        WindDirection::E => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-24-1024.png",
        WindDirection::S => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-22-1024.png",
        WindDirection::W => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-21-1024.png",
        WindDirection::NE => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-06-1024.png",
        WindDirection::SE => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-08-1024.png",
        WindDirection::SW => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-05-1024.png",
        WindDirection::NW => "https://cdn1.iconfinder.com/data/icons/arrow-for-love/512/arrrow-09-07-1024.png",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindMap {
    city: String,
    center: Coordinates,
    direction: WindDirection,
}

impl WindMap {
    pub fn new(city: impl Into<String>, center: Coordinates, direction: WindDirection) -> Self {
        Self { city: city.into(), center, direction }
    }

    /// `{city}_wind_map.html`, with path separators replaced.
    pub fn file_name(&self) -> String {
        let safe: String = self
            .city
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        format!("{safe}_wind_map.html")
    }

    /// Arrow positions on the south-west to north-east diagonal.
    pub fn arrow_positions(&self) -> Vec<Coordinates> {
        (0..ARROW_COUNT)
            .map(|i| {
                let shift = -ARROW_START_OFFSET + i as f64 * ARROW_STEP;
                Coordinates { lat: self.center.lat + shift, lon: self.center.lon + shift }
            })
            .collect()
    }

    pub fn render_html(&self) -> String {
        let Coordinates { lat, lon } = self.center;
        let popup = js_string(&format!("{}, Wind Direction: {}", self.city, self.direction));

        let markers: String = self
            .arrow_positions()
            .iter()
            .map(|pos| {
                format!(
                    "    L.marker([{}, {}], {{ icon: arrowIcon }}).addTo(map).bindPopup(\"Wind Direction\");\n",
                    pos.lat, pos.lon
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <link rel="stylesheet" href="{LEAFLET_CSS}" />
  <script src="{LEAFLET_JS}"></script>
  <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
  <div id="map"></div>
  <script>
    var map = L.map("map").setView([{lat}, {lon}], {ZOOM});
    L.tileLayer("{TILE_URL}", {{
      maxZoom: 19,
      attribution: "&copy; OpenStreetMap contributors"
    }}).addTo(map);
    L.marker([{lat}, {lon}]).addTo(map).bindPopup({popup});
    var arrowIcon = L.icon({{
      iconUrl: "{icon}",
      iconSize: [{size}, {size}]
    }});
{markers}  </script>
</body>
</html>
"#,
            title = escape_html(&format!("{} wind map", self.city)),
            icon = arrow_icon_url(self.direction),
            size = ARROW_SIZE_PX,
        )
    }

    /// Write the page into `dir` and return the file path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.render_html())
            .with_context(|| format!("Failed to write wind map: {}", path.display()))?;
        info!(path = %path.display(), "Wind map written");
        Ok(path)
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Quoted JS string literal, HTML-escaped so it cannot close the script block.
fn js_string(s: &str) -> String {
    serde_json::Value::String(escape_html(s))
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> WindMap {
        WindMap::new("Tokyo", Coordinates { lat: 35.6895, lon: 139.6917 }, WindDirection::SE)
    }

    #[test]
    fn file_name_follows_city() {
        assert_eq!(map().file_name(), "Tokyo_wind_map.html");
        let odd = WindMap::new("a/b", Coordinates { lat: 0.0, lon: 0.0 }, WindDirection::N);
        assert_eq!(odd.file_name(), "a_b_wind_map.html");
    }

    #[test]
    fn arrows_step_along_the_diagonal() {
        let positions = map().arrow_positions();
        assert_eq!(positions.len(), ARROW_COUNT);

        for (i, pos) in positions.iter().enumerate() {
            let shift = -0.05 + i as f64 * 0.03;
            assert!((pos.lat - (35.6895 + shift)).abs() < 1e-9);
            assert!((pos.lon - (139.6917 + shift)).abs() < 1e-9);
        }
    }

    #[test]
    fn html_contains_center_popup_and_direction_icon() {
        let html = map().render_html();
        assert!(html.contains("setView([35.6895, 139.6917], 11)"));
        assert!(html.contains("Tokyo, Wind Direction: SE"));
        assert!(html.contains(arrow_icon_url(WindDirection::SE)));
        assert_eq!(html.matches("icon: arrowIcon").count(), ARROW_COUNT);
    }

    #[test]
    fn popup_text_is_escaped() {
        let m = WindMap::new("<b>\"x\"", Coordinates { lat: 0.0, lon: 0.0 }, WindDirection::N);
        let html = m.render_html();
        assert!(!html.contains("<b>\"x\""));
        assert!(html.contains("&lt;b&gt;&quot;x&quot;"));
    }

    #[test]
    fn popup_text_escapes_line_breaks() {
        let m = WindMap::new("a\nb\r\u{2028}c", Coordinates { lat: 0.0, lon: 0.0 }, WindDirection::N);
        let html = m.render_html();
        let line = html.lines().find(|l| l.contains("bindPopup(\"a")).unwrap();

        assert!(line.contains(r#"bindPopup("a\nb\r\u2028c, Wind Direction: N");"#));
        assert!(!line.contains('\u{2028}'));
    }

    #[test]
    fn write_to_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = map().write_to(dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "Tokyo_wind_map.html");
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("<!DOCTYPE html>"));
    }
}
