//! SVG output for laser cutters.
//!
//! Coordinates are millimetres with y pointing up; the document is
//! flipped so the profile reads the right way up.

use crate::ProfileError;
use ::svg::{node::element::Line as SvgLine, Document};
use geo::Line;
use std::path::Path;

/// Cut line stroke width in mm.
const STROKE_MM: f64 = 0.5;

/// Returns an SVG document drawing `lines`.
pub fn to_svg(lines: &[Line<f64>]) -> Document {
    let (width, height) = lines
        .iter()
        .flat_map(|line| [line.start, line.end])
        .fold((0.0_f64, 0.0_f64), |(w, h), c| (w.max(c.x), h.max(c.y)));

    let margin = STROKE_MM;
    let doc = Document::new()
        .set("width", format!("{}mm", width + 2.0 * margin))
        .set("height", format!("{}mm", height + 2.0 * margin))
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                -margin,
                -margin,
                width + 2.0 * margin,
                height + 2.0 * margin
            ),
        );

    lines.iter().fold(doc, |doc, line| {
        doc.add(
            SvgLine::new()
                .set("x1", line.start.x)
                .set("y1", height - line.start.y)
                .set("x2", line.end.x)
                .set("y2", height - line.end.y)
                .set("stroke", "red")
                .set("stroke-width", STROKE_MM),
        )
    })
}

/// Writes `lines` as an SVG document to `path`.
pub fn save_svg<P: AsRef<Path>>(path: P, lines: &[Line<f64>]) -> Result<(), ProfileError> {
    let path = path.as_ref();
    ::svg::save(path, &to_svg(lines)).map_err(|e| ProfileError::Io(e, path.to_owned()))
}
