use frakt::geometry::KochCurve;
use frakt::operations::transform::MapToCanvas;
use frakt::render::{Scene, StrokeStyle, SvgPolyline, DISPLAY_PROG};

fn main() -> frakt::Result<()> {
    let mut koch = KochCurve::unit();
    koch.refine_times(4)?;

    let mapper = MapToCanvas::new(1024, 768)?;
    let device = mapper.execute(koch.polyline());

    let mut scene = Scene::new("test", 1024, 768);
    scene.add(SvgPolyline::new(device, StrokeStyle::new(3.0)?));

    let path = scene.write_svg(None)?;
    println!("wrote {}", path.display());

    if std::env::var_os("FRAKT_DISPLAY").is_some() {
        Scene::display(DISPLAY_PROG, &path)?;
    }
    Ok(())
}
