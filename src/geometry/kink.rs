use std::f64::consts::FRAC_PI_3;

use crate::math::rotate_2d::rotate_about;
use crate::math::Point2;

use super::Segment;

/// Subdivides a segment into the four-segment Koch kink `_/\_`, returning
/// the three interior vertices in curve order.
///
/// The first and last returned points sit at one third and two thirds of
/// the segment; the middle point is the apex of the equilateral triangle
/// erected on that central third, obtained by rotating the two-thirds
/// point 60° counter-clockwise about the one-third point. The segment's
/// own endpoints are not returned: callers splice the three vertices
/// between them.
///
/// A degenerate segment yields three copies of its start point; the
/// construction never divides by the segment length.
#[must_use]
pub fn kink_points(segment: &Segment) -> [Point2; 3] {
    let d = segment.delta();
    let p1 = segment.start + d / 3.0;
    let p3 = segment.start + d * (2.0 / 3.0);
    let apex = rotate_about(p3, p1, FRAC_PI_3);
    [p1, apex, p3]
}
