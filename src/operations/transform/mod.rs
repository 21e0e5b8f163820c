mod canvas;
mod viewport;

pub use canvas::MapToCanvas;
pub use viewport::{MapViewport, Viewport};
