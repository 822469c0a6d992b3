//! Caption overlay rendering: box geometry, text layout, SVG construction and
//! compositing onto the base image.

pub mod composite;
pub mod geometry;
pub mod layout;
pub mod overlay;

pub use composite::{composite_caption, load_fontdb};
pub use geometry::CaptionBox;
pub use layout::{layout_caption, wrap_text, TextLine};
pub use overlay::{build_overlay, escape_xml};
