use std::path::Path;
use std::sync::Arc;

use swash::scale::image::Image;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::{FontRef, GlyphId, Metrics};

use crate::{FontError, FontMetrics, Result, ScaledFontMetrics};

/// Parsed font face backing a loaded [`Typeface`] (TTF/OTF).
///
/// This is a thin wrapper around `swash::FontRef` that owns the
/// underlying font data and exposes metrics and glyph rasterization.
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Offset to the table directory for this font.
    offset: u32,
    /// Cache key used internally by swash.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
}

impl FontFace {
    /// Parse a face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            offset,
            key,
            metrics,
        })
    }

    /// Parse a face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Parse a face from a font file on disk.
    pub fn from_path(path: impl AsRef<Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Return a transient `FontRef` for interacting with swash APIs.
    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }

    /// Map a character to its glyph id (0 when unmapped).
    pub fn glyph_id(&self, ch: char) -> GlyphId {
        self.as_swash_ref().charmap().map(ch)
    }

    /// Horizontal advance of a glyph at the given pixel size.
    pub fn advance_width(&self, glyph_id: GlyphId, font_size: f32) -> f32 {
        self.as_swash_ref()
            .glyph_metrics(&[])
            .scale(font_size)
            .advance_width(glyph_id)
    }

    /// Rasterize a glyph at the given pixel size, preferring an
    /// embedded bitmap strike and falling back to the outline.
    pub fn render_glyph(&self, glyph_id: GlyphId, font_size: f32) -> Option<Image> {
        let mut context = ScaleContext::new();
        let font = self.as_swash_ref();
        let mut scaler = context.builder(font).size(font_size).build();
        Render::new(&[Source::ColorBitmap(StrikeWith::BestFit), Source::Outline])
            .render(&mut scaler, glyph_id)
    }
}

/// Opaque, cheaply clonable typeface handle.
///
/// Clones share one underlying allocation: two clones are the *same*
/// handle, observable through [`Typeface::same_handle`]. A handle is
/// either a parsed [`FontFace`] or the builtin faceless fallback.
#[derive(Debug, Clone)]
pub struct Typeface {
    inner: Arc<TypefaceKind>,
}

#[derive(Debug)]
enum TypefaceKind {
    Fallback,
    Face(FontFace),
}

impl Typeface {
    /// A builtin fallback handle carrying no parsed face.
    ///
    /// Every call constructs a distinct handle; [`SwashSource`]
    /// resolves one platform default per source and shares it instead.
    ///
    /// [`SwashSource`]: crate::SwashSource
    pub fn fallback() -> Self {
        Typeface {
            inner: Arc::new(TypefaceKind::Fallback),
        }
    }

    /// Wrap an already parsed face in a handle.
    pub fn from_face(face: FontFace) -> Self {
        Typeface {
            inner: Arc::new(TypefaceKind::Face(face)),
        }
    }

    /// Parse a handle from raw bytes.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        FontFace::from_vec(data, index).map(Self::from_face)
    }

    /// Parse a handle from a font file on disk.
    pub fn from_file(path: impl AsRef<Path>, index: usize) -> Result<Self> {
        FontFace::from_path(path, index).map(Self::from_face)
    }

    /// The parsed face, or `None` for a fallback handle.
    pub fn face(&self) -> Option<&FontFace> {
        match &*self.inner {
            TypefaceKind::Face(face) => Some(face),
            TypefaceKind::Fallback => None,
        }
    }

    /// True for handles constructed via [`Typeface::fallback`].
    pub fn is_fallback(&self) -> bool {
        matches!(&*self.inner, TypefaceKind::Fallback)
    }

    /// Pointer identity: true when both handles share one underlying
    /// allocation. This is the reuse guarantee the cache provides.
    pub fn same_handle(&self, other: &Typeface) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
