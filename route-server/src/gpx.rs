//! GPX track export.
//!
//! Turns a computed route into a GPX 1.1 document so it can be opened in
//! navigation apps. One track, one segment, one `trkpt` per geometry
//! position.

use chrono::{SecondsFormat, Utc};

use crate::domain::{MapPoint, NormalizedRoute};

/// Name used for unlabeled start points.
const DEFAULT_START_NAME: &str = "Початок";

/// Name used for unlabeled end points.
const DEFAULT_END_NAME: &str = "Кінець";

/// Render a route as a GPX 1.1 document.
pub fn route_gpx(
    route: &NormalizedRoute,
    start: Option<&MapPoint>,
    end: Option<&MapPoint>,
) -> String {
    let start_name = start
        .and_then(|p| p.label.as_deref())
        .unwrap_or(DEFAULT_START_NAME);
    let end_name = end
        .and_then(|p| p.label.as_deref())
        .unwrap_or(DEFAULT_END_NAME);
    let time = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut gpx = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="UzhRoutePlanner" xmlns="http://www.topografix.com/GPX/1/1">
  <metadata>
    <name>Маршрут: {} → {}</name>
    <time>{}</time>
  </metadata>
  <trk>
    <name>Маршрут</name>
    <trkseg>
"#,
        escape_text(start_name),
        escape_text(end_name),
        time
    );

    // Geometry is (lon, lat); GPX wants lat/lon attributes.
    for [lon, lat] in &route.geometry.coordinates {
        gpx.push_str(&format!("      <trkpt lat=\"{lat}\" lon=\"{lon}\"></trkpt>\n"));
    }

    gpx.push_str("    </trkseg>\n  </trk>\n</gpx>");
    gpx
}

/// Escape XML text content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
