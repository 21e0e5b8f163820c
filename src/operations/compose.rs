use crate::error::{OperationError, Result};
use crate::geometry::{Curve, Polyline};

/// Composes two parametrized curves by point-wise vector sum at matched
/// positions.
///
/// No renormalization is applied: if the sum should be scaled (for
/// example halved), that is an explicit post-step for the caller.
pub struct Compose<'a> {
    a: &'a dyn Curve,
    b: &'a dyn Curve,
    samples: u32,
}

impl<'a> Compose<'a> {
    /// Creates a new `Compose` operation.
    #[must_use]
    pub fn new(a: &'a dyn Curve, b: &'a dyn Curve, samples: u32) -> Self {
        Self { a, b, samples }
    }

    /// Executes the composition, returning a polyline with exactly
    /// `samples` vertices where vertex `i` is `a(s_i) + b(s_i)` for
    /// evenly spaced `s_i` from 0 to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 samples are requested or either
    /// curve fails to evaluate.
    pub fn execute(&self) -> Result<Polyline> {
        if self.samples < 2 {
            return Err(OperationError::InvalidInput(
                "composition requires at least 2 samples".to_owned(),
            )
            .into());
        }

        let mut points = Vec::with_capacity(self.samples as usize);
        let last = f64::from(self.samples - 1);
        for i in 0..self.samples {
            let s = f64::from(i) / last;
            let pa = self.a.point_at(s)?;
            let pb = self.b.point_at(s)?;
            points.push(pa + pb.coords);
        }
        Ok(Polyline::from_points(points))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{FunctionCurve, KochCurve};
    use crate::math::Point2;

    #[test]
    fn zero_function_is_additive_identity() {
        let zero = FunctionCurve::from_point_fn(|_| Point2::origin());
        let identity = FunctionCurve::graph(|s| s);

        let composed = Compose::new(&zero, &identity, 5).execute().unwrap();
        let expected = identity.materialize(5).unwrap();

        assert_eq!(composed.point_count(), 5);
        for (p, q) in composed.points().iter().zip(expected.points()) {
            assert_relative_eq!(*p, *q, epsilon = 1e-12);
        }
    }

    #[test]
    fn sums_fractal_and_function_pointwise() {
        let mut koch = KochCurve::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        koch.refine().unwrap();
        let lift = FunctionCurve::from_point_fn(|_| Point2::new(0.0, 1.0));

        let composed = Compose::new(&koch, &lift, 9).execute().unwrap();
        for (i, p) in composed.points().iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let s = i as f64 / 8.0;
            let base = koch.point_at(s).unwrap();
            assert_relative_eq!(p.x, base.x, epsilon = 1e-10);
            assert_relative_eq!(p.y, base.y + 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn rejects_fewer_than_two_samples() {
        let a = FunctionCurve::graph(|s| s);
        let b = FunctionCurve::graph(|s| -s);
        assert!(Compose::new(&a, &b, 1).execute().is_err());
    }
}
