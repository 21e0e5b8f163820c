use std::fmt;

use crate::error::{GeometryError, Result};
use crate::geometry::Polyline;
use crate::math::Point2;
use crate::operations::SampleCurve;

use super::Curve;

/// Adapts an arbitrary function of the normalized position to the
/// [`Curve`] capability, so analytic curves compose with fractal ones.
pub struct FunctionCurve {
    f: Box<dyn Fn(f64) -> Point2>,
}

impl FunctionCurve {
    /// Wraps a full point-valued function `s ↦ (x, y)`.
    #[must_use]
    pub fn from_point_fn(f: impl Fn(f64) -> Point2 + 'static) -> Self {
        Self { f: Box::new(f) }
    }

    /// Wraps a scalar function as its graph `s ↦ (s, f(s))`.
    #[must_use]
    pub fn graph(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::from_point_fn(move |s| Point2::new(s, f(s)))
    }

    /// Wraps a scalar function as its graph over `x` in `[-1, 1]`,
    /// `s ↦ (2s - 1, f(s))`.
    #[must_use]
    pub fn centered_graph(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::from_point_fn(move |s| Point2::new(2.0 * s - 1.0, f(s)))
    }

    /// Samples the function at `n` evenly spaced positions into an
    /// explicit vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 2`.
    pub fn materialize(&self, n: u32) -> Result<Polyline> {
        SampleCurve::new(self, n).execute()
    }
}

impl Curve for FunctionCurve {
    fn point_at(&self, s: f64) -> Result<Point2> {
        if !(0.0..=1.0).contains(&s) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "s",
                value: s,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok((self.f)(s))
    }
}

impl fmt::Debug for FunctionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCurve").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn graph_maps_position_to_x() {
        let curve = FunctionCurve::graph(|s| s * s);
        let p = curve.point_at(0.5).unwrap();
        assert_relative_eq!(p, Point2::new(0.5, 0.25), epsilon = 1e-12);
    }

    #[test]
    fn centered_graph_spans_unit_interval() {
        let curve = FunctionCurve::centered_graph(|_| 0.0);
        assert_relative_eq!(curve.point_at(0.0).unwrap(), Point2::new(-1.0, 0.0));
        assert_relative_eq!(curve.point_at(0.5).unwrap(), Point2::new(0.0, 0.0));
        assert_relative_eq!(curve.point_at(1.0).unwrap(), Point2::new(1.0, 0.0));
    }

    #[test]
    fn out_of_range_position_fails() {
        let curve = FunctionCurve::graph(|s| s);
        assert!(curve.point_at(-0.5).is_err());
        assert!(curve.point_at(1.5).is_err());
    }

    #[test]
    fn materialize_samples_evenly() {
        let curve = FunctionCurve::graph(|s| s);
        let pline = curve.materialize(5).unwrap();
        assert_eq!(pline.point_count(), 5);
        assert_relative_eq!(pline.points()[0], Point2::new(0.0, 0.0));
        assert_relative_eq!(pline.points()[2], Point2::new(0.5, 0.5));
        assert_relative_eq!(pline.points()[4], Point2::new(1.0, 1.0));
    }

    #[test]
    fn materialize_rejects_single_sample() {
        let curve = FunctionCurve::graph(|s| s);
        assert!(curve.materialize(1).is_err());
    }
}
