pub mod curve;
pub mod kink;
pub mod polyline;
pub mod segment;

pub use curve::{Curve, FunctionCurve, KochCurve};
pub use kink::kink_points;
pub use polyline::Polyline;
pub use segment::Segment;
