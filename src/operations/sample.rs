use crate::error::{OperationError, Result};
use crate::geometry::{Curve, Polyline};

/// Samples a parametrized curve at evenly spaced positions, producing an
/// explicit vertex sequence.
pub struct SampleCurve<'a> {
    curve: &'a dyn Curve,
    samples: u32,
}

impl<'a> SampleCurve<'a> {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(curve: &'a dyn Curve, samples: u32) -> Self {
        Self { curve, samples }
    }

    /// Executes the sampling, returning a polyline with exactly `samples`
    /// vertices at increasing positions from 0 to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 samples are requested or the
    /// curve fails to evaluate.
    pub fn execute(&self) -> Result<Polyline> {
        if self.samples < 2 {
            return Err(OperationError::InvalidInput(
                "sampling requires at least 2 samples".to_owned(),
            )
            .into());
        }

        let mut points = Vec::with_capacity(self.samples as usize);
        let last = f64::from(self.samples - 1);
        for i in 0..self.samples {
            let s = f64::from(i) / last;
            points.push(self.curve.point_at(s)?);
        }
        Ok(Polyline::from_points(points))
    }
}
