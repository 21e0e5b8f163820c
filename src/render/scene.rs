use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{RenderError, Result};

use super::SvgPolyline;

/// Default external program used to display a written scene.
pub const DISPLAY_PROG: &str = "display";

/// A container assembling rendered polylines into an SVG document.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    width: u32,
    height: u32,
    items: Vec<SvgPolyline>,
}

impl Scene {
    /// Creates an empty scene with the given canvas size in pixels.
    #[must_use]
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_owned(),
            width,
            height,
            items: Vec::new(),
        }
    }

    /// Adds a rendered polyline to the scene.
    pub fn add(&mut self, item: SvgPolyline) {
        self.items.push(item);
    }

    /// Returns the canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Serializes the scene as a complete SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut doc = String::from("<?xml version=\"1.0\"?>\n");
        doc.push_str(&format!(
            "<svg height=\"{}\" width=\"{}\">\n",
            self.height, self.width
        ));
        doc.push_str(" <g style=\"fill-opacity:1.0; stroke:black; stroke-width:1;\">\n");
        for item in &self.items {
            doc.push_str(&item.to_svg());
        }
        doc.push_str(" </g>\n</svg>\n");
        doc
    }

    /// Writes the scene to `path`, or to `<name>.svg` in the working
    /// directory when no path is given. An existing file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_svg(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(format!("{}.svg", self.name)),
        };
        fs::write(&path, self.to_svg()).map_err(RenderError::Io)?;
        Ok(path)
    }

    /// Invokes an external display program on a written scene file.
    ///
    /// The viewer's exit status is not interpreted; only a failure to
    /// spawn the program is reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned.
    pub fn display(prog: &str, path: &Path) -> Result<()> {
        Command::new(prog)
            .arg(path)
            .status()
            .map_err(RenderError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polyline;
    use crate::math::Point2;
    use crate::render::StrokeStyle;

    fn sample_scene() -> Scene {
        let mut scene = Scene::new("test", 1024, 768);
        let pline = Polyline::from_points(vec![
            Point2::new(0.0, 384.0),
            Point2::new(1024.0, 384.0),
        ]);
        scene.add(SvgPolyline::new(pline, StrokeStyle::new(3.0).unwrap()));
        scene
    }

    #[test]
    fn document_wraps_items_in_svg_group() {
        let doc = sample_scene().to_svg();
        assert!(doc.starts_with("<?xml version=\"1.0\"?>\n"));
        assert!(doc.contains("<svg height=\"768\" width=\"1024\">"));
        assert!(doc.contains("<g style="));
        assert!(doc.contains("<polyline points=\"0,384 1024,384\""));
        assert!(doc.ends_with("</g>\n</svg>\n"));
    }

    #[test]
    fn empty_scene_is_a_valid_document() {
        let doc = Scene::new("empty", 10, 10).to_svg();
        assert!(doc.contains("<svg height=\"10\" width=\"10\">"));
        assert!(!doc.contains("<polyline"));
    }

    #[test]
    fn write_svg_writes_full_document() {
        let scene = sample_scene();
        let dir = std::env::temp_dir().join("frakt_scene_test");
        fs::create_dir_all(&dir).unwrap();
        let path = scene.write_svg(Some(&dir.join("out.svg"))).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, scene.to_svg());
        fs::remove_file(&path).unwrap();
    }
}
