pub mod boundary;
pub mod overlay;

pub use boundary::{palette_color, Boundary};
pub use overlay::{MapOverlay, Marker, MarkerIcon, Viewport, DEFAULT_ZOOM, FOCUS_ZOOM};
