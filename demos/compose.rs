use std::f64::consts::TAU;

use frakt::geometry::{FunctionCurve, KochCurve};
use frakt::math::Point2;
use frakt::operations::transform::{MapViewport, Viewport};
use frakt::operations::Compose;
use frakt::render::{Scene, StrokeStyle, SvgPolyline};

fn main() -> frakt::Result<()> {
    let mut koch = KochCurve::unit();
    koch.refine_times(5)?;

    // A vertical sine displacement added on top of the fractal.
    let wave = FunctionCurve::from_point_fn(|s| Point2::new(0.0, 0.1 * (3.0 * TAU * s).sin()));
    let blended = Compose::new(&koch, &wave, 2048).execute()?;

    let viewport = Viewport::new(-1.2, 1.2, -0.4, 1.2)?;
    let mapper = MapViewport::new(viewport, 1024, 768)?;
    let device = mapper.execute(&blended);

    let mut scene = Scene::new("compose", 1024, 768);
    scene.add(SvgPolyline::new(device, StrokeStyle::new(2.0)?.with_color([32, 64, 192])));

    let path = scene.write_svg(None)?;
    println!("wrote {}", path.display());
    Ok(())
}
