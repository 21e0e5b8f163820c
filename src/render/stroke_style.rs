use crate::error::{RenderError, Result};

/// Style parameters for a rendered polyline stroke.
///
/// Fill is always `none`; the stroke color defaults to black and can be
/// overridden with an 8-bit RGB triple.
#[derive(Debug, Clone, Copy)]
pub struct StrokeStyle {
    width: f64,
    color: Option<[u8; 3]>,
}

impl StrokeStyle {
    /// Creates a new stroke style with a black stroke.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        if width <= 0.0 {
            return Err(
                RenderError::InvalidStyle("stroke width must be positive".to_owned()).into(),
            );
        }
        Ok(Self { width, color: None })
    }

    /// Returns this style with the given RGB stroke color.
    #[must_use]
    pub fn with_color(self, rgb: [u8; 3]) -> Self {
        Self {
            color: Some(rgb),
            ..self
        }
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke color as a CSS color string.
    #[must_use]
    pub fn color(&self) -> String {
        match self.color {
            Some([r, g, b]) => super::color_hex(r, g, b),
            None => "black".to_owned(),
        }
    }
}
