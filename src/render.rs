//! SVG path serialization for traced outlines

use crate::layout::Point;

/// Serialize an outline polygon into an SVG path `d` attribute string.
///
/// The caller supplies the linear scale from plan units to drawing units,
/// e.g. `|mm| mm as f64 / 10.0` for a 1:10 plan. Empty input yields an
/// empty string.
pub fn polygon_to_svg_path<F>(points: &[Point], scale: F) -> String
where
    F: Fn(i64) -> f64,
{
    if points.is_empty() {
        return String::new();
    }

    let mut d = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        d.push_str(&format!(
            "{}{:.2} {:.2}",
            command,
            scale(point.x),
            scale(point.y)
        ));
    }
    d.push_str(" Z");
    d
}
