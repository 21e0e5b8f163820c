use crate::error::{GeometryError, OperationError, Result};
use crate::math::Point2;

use crate::geometry::kink::kink_points;
use crate::geometry::{Polyline, Segment};

use super::Curve;

/// Maximum accepted refinement depth.
///
/// Point count grows as `4^k + 1`; at depth 12 the curve already holds
/// roughly 16.7 million vertices.
pub const MAX_REFINEMENTS: u32 = 12;

/// A Koch-type fractal curve grown from a seed segment.
///
/// The curve starts as a single straight segment and is refined by
/// replacing every segment with the four-segment triangular kink. After
/// `k` refinements from the two-point seed it holds `4^k + 1` vertices;
/// the seed endpoints are never moved.
#[derive(Debug, Clone)]
pub struct KochCurve {
    polyline: Polyline,
}

impl KochCurve {
    /// Creates a fractal curve from a seed segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            polyline: Polyline::from_points(vec![start, end]),
        }
    }

    /// Creates the default unit curve seeded on (-1, 0) → (1, 0).
    #[must_use]
    pub fn unit() -> Self {
        Self::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0))
    }

    /// Resumes a fractal curve from an existing vertex sequence.
    #[must_use]
    pub fn from_polyline(polyline: Polyline) -> Self {
        Self { polyline }
    }

    /// Applies one refinement step: every segment of the current curve is
    /// replaced by its kink.
    ///
    /// The pass iterates over a snapshot of the pre-refinement segments,
    /// so vertices inserted during the pass are never re-subdivided. A
    /// curve with `n` vertices grows to `4(n - 1) + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has no segments to refine.
    pub fn refine(&mut self) -> Result<()> {
        let points = self.polyline.points();
        if points.len() < 2 {
            return Err(GeometryError::DegenerateCurve(
                "curve has no segments to refine".to_owned(),
            )
            .into());
        }

        let mut refined = Vec::with_capacity((points.len() - 1) * 4 + 1);
        refined.push(points[0]);
        for pair in points.windows(2) {
            let [p1, apex, p3] = kink_points(&Segment::new(pair[0], pair[1]));
            refined.extend([p1, apex, p3, pair[1]]);
        }
        self.polyline = Polyline::from_points(refined);
        Ok(())
    }

    /// Applies `k` successive refinement steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `k` exceeds [`MAX_REFINEMENTS`] or the curve
    /// has no segments to refine.
    pub fn refine_times(&mut self, k: u32) -> Result<()> {
        if k > MAX_REFINEMENTS {
            return Err(OperationError::InvalidInput(format!(
                "refinement depth {k} exceeds the maximum of {MAX_REFINEMENTS}"
            ))
            .into());
        }
        for _ in 0..k {
            self.refine()?;
        }
        Ok(())
    }

    /// Returns the number of vertices in the current curve.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.polyline.point_count()
    }

    /// Returns the curve's vertex sequence.
    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    /// Consumes the curve, returning its vertex sequence.
    #[must_use]
    pub fn into_polyline(self) -> Polyline {
        self.polyline
    }
}

impl Curve for KochCurve {
    fn point_at(&self, s: f64) -> Result<Point2> {
        self.polyline.point_at(s)
    }
}
