//! Quill: resource-backed typeface loading and caching.
//!
//! Register a font payload under an integer identifier, then resolve
//! it through a [`Typefaces`] cache. Parsing happens once; every
//! later request for the same identifier returns the identical shared
//! handle.
//!
//! ```no_run
//! use std::sync::Arc;
//! use quill::{Context, ResourceId, Resources, TextLabel, Typefaces};
//!
//! const HEADLINE_FONT: ResourceId = ResourceId::new(1);
//!
//! let mut resources = Resources::new();
//! resources.register_file(HEADLINE_FONT, "fonts/pacifico.ttf");
//! let context = Arc::new(Context::new(resources, std::env::temp_dir()));
//!
//! let faces = Typefaces::new();
//! let mut label = TextLabel::new(context.clone()).with_text("three little bears");
//! faces.apply(&mut label, HEADLINE_FONT);
//! assert!(label.typeface().same_handle(&faces.get(&context, HEADLINE_FONT)));
//! ```

pub use quill_resources::{Context, ResourceError, ResourceId, Resources};
pub use quill_text::TextLabel;
pub use quill_typeface::{
    FaceSource, FontError, FontFace, FontMetrics, FontTarget, ScaledFontMetrics, SwashSource,
    Typeface, Typefaces, load_system_default,
};
