use crate::geometry::Polyline;

use super::StrokeStyle;

/// Formats an 8-bit RGB triple as a short `#rgb` hex color, quantizing
/// each channel to 4 bits.
#[must_use]
pub fn color_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:x}{:x}{:x}", r / 16, g / 16, b / 16)
}

/// A device-space polyline together with its stroke style, serializable
/// as an SVG `<polyline>` element.
#[derive(Debug, Clone)]
pub struct SvgPolyline {
    polyline: Polyline,
    style: StrokeStyle,
}

impl SvgPolyline {
    /// Creates a new renderable polyline.
    #[must_use]
    pub fn new(polyline: Polyline, style: StrokeStyle) -> Self {
        Self { polyline, style }
    }

    /// Serializes this polyline as an SVG element.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut points = String::new();
        for p in self.polyline.points() {
            if !points.is_empty() {
                points.push(' ');
            }
            points.push_str(&format!("{},{}", p.x, p.y));
        }
        format!(
            "  <polyline points=\"{points}\" style=\"fill:none;stroke:{};stroke-width:{}\" />\n",
            self.style.color(),
            self.style.width()
        )
    }
}
