mod scene;
mod stroke_style;
mod svg;

pub use scene::{Scene, DISPLAY_PROG};
pub use stroke_style::StrokeStyle;
pub use svg::{color_hex, SvgPolyline};
