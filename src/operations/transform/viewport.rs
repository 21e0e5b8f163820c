use crate::error::{Result, ViewportError};
use crate::geometry::Polyline;
use crate::math::{Point2, TOLERANCE};

/// A logical rectangle `(x1, x2) × (y1, y2)` selecting the region of the
/// plane to remap onto a pixel canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Viewport {
    /// Creates a new viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis range is empty; a zero-width or
    /// zero-height rectangle is a configuration error, not a recoverable
    /// runtime condition.
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Result<Self> {
        if (x2 - x1).abs() < TOLERANCE {
            return Err(ViewportError::EmptyXRange(x1).into());
        }
        if (y2 - y1).abs() < TOLERANCE {
            return Err(ViewportError::EmptyYRange(y1).into());
        }
        Ok(Self { x1, x2, y1, y2 })
    }
}

/// Maps an arbitrary logical rectangle linearly onto
/// `(0, width) × (0, height)`, with the y-axis flipped.
pub struct MapViewport {
    viewport: Viewport,
    width: u32,
    height: u32,
}

impl MapViewport {
    /// Creates a new `MapViewport` operation.
    ///
    /// # Errors
    ///
    /// Returns an error if either pixel dimension is zero.
    pub fn new(viewport: Viewport, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ViewportError::ZeroPixelSize { width, height }.into());
        }
        Ok(Self {
            viewport,
            width,
            height,
        })
    }

    /// Executes the remap, returning a fresh device-space polyline.
    ///
    /// The input is left untouched; applying the map twice
    /// double-transforms by design.
    #[must_use]
    pub fn execute(&self, polyline: &Polyline) -> Polyline {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let vp = self.viewport;
        let points = polyline
            .points()
            .iter()
            .map(|p| {
                Point2::new(
                    (p.x - vp.x1) * w / (vp.x2 - vp.x1),
                    (p.y - vp.y2) * h / (vp.y1 - vp.y2),
                )
            })
            .collect();
        Polyline::from_points(points)
    }
}
