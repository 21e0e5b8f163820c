mod function;
mod koch;

pub use function::FunctionCurve;
pub use koch::{KochCurve, MAX_REFINEMENTS};

use crate::error::Result;
use crate::math::Point2;

/// Trait for plane curves parametrized over the unit interval.
///
/// Implemented by fractal polylines (via arc-length sampling) and by
/// analytic function adapters, so composition can treat both uniformly.
pub trait Curve {
    /// Evaluates the curve at normalized position `s` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is out of range or the curve is degenerate.
    fn point_at(&self, s: f64) -> Result<Point2>;
}
