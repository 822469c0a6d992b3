//! Request-scoped error taxonomy.
//!
//! Every failure aborts its request and maps to exactly one HTTP response;
//! nothing here is retried and nothing affects other in-flight requests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptionError {
    /// The requested image id has no corresponding asset file on disk.
    #[error("image not found: {0}")]
    AssetNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("invalid overlay document: {0}")]
    Svg(#[from] usvg::Error),

    /// Raster-engine failure with no richer error value to wrap.
    #[error("{0}")]
    Render(String),
}
