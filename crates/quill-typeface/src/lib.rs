//! Typeface handles and the resource-backed typeface cache.
//!
//! Parsing a font is expensive; reusing a parsed face is cheap. This
//! crate loads font payloads out of an application's [`quill_resources`]
//! registry, turns them into shared [`Typeface`] handles, and hands the
//! same handle back on every subsequent request for the same resource.

pub mod face;
pub mod loader;
pub mod metrics;

pub use face::{FontFace, Typeface};
pub use loader::{FaceSource, FontTarget, SwashSource, Typefaces, load_system_default};
pub use metrics::{FontMetrics, ScaledFontMetrics};

use core::fmt;

use quill_resources::ResourceError;

/// Errors that can occur while working with typefaces.
#[derive(Debug)]
pub enum FontError {
    Io(std::io::Error),
    Resource(ResourceError),
    InvalidFont,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::Io(err) => write!(f, "font I/O error: {err}"),
            FontError::Resource(err) => write!(f, "font resource error: {err}"),
            FontError::InvalidFont => write!(f, "invalid font data"),
        }
    }
}

impl std::error::Error for FontError {}

impl From<std::io::Error> for FontError {
    fn from(err: std::io::Error) -> Self {
        FontError::Io(err)
    }
}

impl From<ResourceError> for FontError {
    fn from(err: ResourceError) -> Self {
        FontError::Resource(err)
    }
}

/// Convenient result alias for typeface operations.
pub type Result<T> = std::result::Result<T, FontError>;
