use thiserror::Error;

/// Top-level error type for the frakt curve engine.
#[derive(Debug, Error)]
pub enum FraktError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate curve: {0}")]
    DegenerateCurve(String),
}

/// Errors related to curve operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to viewport configuration.
#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("viewport x-range is empty (x1 = x2 = {0})")]
    EmptyXRange(f64),

    #[error("viewport y-range is empty (y1 = y2 = {0})")]
    EmptyYRange(f64),

    #[error("pixel dimensions must be positive, got {width}x{height}")]
    ZeroPixelSize { width: u32, height: u32 },
}

/// Errors related to SVG output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid stroke style: {0}")]
    InvalidStyle(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`FraktError`].
pub type Result<T> = std::result::Result<T, FraktError>;
