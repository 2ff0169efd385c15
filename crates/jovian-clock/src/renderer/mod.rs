pub mod color;
pub mod draw_list;
pub mod projection;
pub mod traits;

// Re-export key types for convenient access
pub use color::Rgb;
pub use draw_list::{DrawList, DrawOp};
pub use projection::{fit_span, ViewScale, MIN_SPAN_ARCSEC};
pub use traits::{Surface, TextAlign, TextStyle};
