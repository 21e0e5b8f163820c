use crate::error::{Result, ViewportError};
use crate::geometry::Polyline;
use crate::math::Point2;

/// Maps logical `[-1, 1] × [-1, 1]` coordinates onto a pixel canvas
/// centered at `(width / 2, height / 2)`, with the y-axis flipped
/// (screen y grows downward).
pub struct MapToCanvas {
    width: u32,
    height: u32,
}

impl MapToCanvas {
    /// Creates a new `MapToCanvas` operation.
    ///
    /// # Errors
    ///
    /// Returns an error if either pixel dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ViewportError::ZeroPixelSize { width, height }.into());
        }
        Ok(Self { width, height })
    }

    /// Executes the remap, returning a fresh device-space polyline.
    ///
    /// The input is left untouched; applying the map twice
    /// double-transforms by design.
    #[must_use]
    pub fn execute(&self, polyline: &Polyline) -> Polyline {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let points = polyline
            .points()
            .iter()
            .map(|p| Point2::new(w / 2.0 + p.x * w / 2.0, h / 2.0 - p.y * h / 2.0))
            .collect();
        Polyline::from_points(points)
    }
}
