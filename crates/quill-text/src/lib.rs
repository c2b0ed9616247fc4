//! Text display elements.

use std::sync::Arc;

use quill_resources::Context;
use quill_typeface::{FontTarget, Typeface};

/// A single line of styled text: content, size, color, and the
/// typeface it renders with.
///
/// The set-typeface mutator makes it a [`FontTarget`], so a
/// [`Typefaces`] cache can style it directly:
///
/// ```no_run
/// # use std::sync::Arc;
/// # use quill_resources::{Context, ResourceId, Resources};
/// # use quill_text::TextLabel;
/// # use quill_typeface::Typefaces;
/// let context = Arc::new(Context::new(Resources::new(), std::env::temp_dir()));
/// let faces = Typefaces::new();
/// let mut label = TextLabel::new(context).with_text("three little bears");
/// faces.apply(&mut label, ResourceId::new(1));
/// ```
///
/// [`Typefaces`]: quill_typeface::Typefaces
#[derive(Debug, Clone)]
pub struct TextLabel {
    context: Arc<Context>,
    text: String,
    typeface: Typeface,
    size_pt: f32,
    color: [u8; 3],
}

impl TextLabel {
    /// An empty black label at 16pt, carrying the builtin fallback
    /// typeface until one is applied.
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            text: String::new(),
            typeface: Typeface::fallback(),
            size_pt: 16.0,
            color: [0, 0, 0],
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_size_pt(mut self, size_pt: f32) -> Self {
        self.size_pt = size_pt;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_size_pt(&mut self, size_pt: f32) {
        self.size_pt = size_pt;
    }

    pub fn size_pt(&self) -> f32 {
        self.size_pt
    }

    pub fn set_color(&mut self, color: [u8; 3]) {
        self.color = color;
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// The typeface the label currently renders with.
    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }
}

impl FontTarget for TextLabel {
    fn context(&self) -> &Context {
        &self.context
    }

    fn set_typeface(&mut self, typeface: Typeface) {
        self.typeface = typeface;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    use quill_resources::{ResourceId, Resources};
    use quill_typeface::{FaceSource, Typefaces};

    struct StubSource;

    impl FaceSource for StubSource {
        fn load_file(&self, _path: &Path) -> quill_typeface::Result<Typeface> {
            Ok(Typeface::fallback())
        }

        fn fallback(&self) -> Typeface {
            Typeface::fallback()
        }
    }

    #[test]
    fn apply_sets_the_resolved_handle_and_chains() {
        let scratch = tempfile::tempdir().unwrap();
        let id = ResourceId::new(2);
        let mut resources = Resources::new();
        resources.register_bytes(id, b"payload".to_vec());
        let context = Arc::new(Context::new(resources, scratch.path()));

        let faces = Typefaces::with_source(Box::new(StubSource));
        let mut label = TextLabel::new(context.clone());

        let returned = faces.apply(&mut label, id);
        returned.set_text("chained");

        assert_eq!(label.text(), "chained");
        assert!(
            label.typeface().same_handle(&faces.get(&context, id)),
            "label should carry the cached handle for the id"
        );
    }

    #[test]
    fn fresh_labels_carry_the_fallback() {
        let context = Arc::new(Context::new(Resources::new(), std::env::temp_dir()));
        let label = TextLabel::new(context);
        assert!(label.typeface().is_fallback());
        assert_eq!(label.text(), "");
        assert_eq!(label.size_pt(), 16.0);
    }

    #[test]
    fn builders_set_the_styling() {
        let context = Arc::new(Context::new(Resources::new(), std::env::temp_dir()));
        let label = TextLabel::new(context)
            .with_text("mittens")
            .with_size_pt(24.0)
            .with_color([10, 20, 30]);

        assert_eq!(label.text(), "mittens");
        assert_eq!(label.size_pt(), 24.0);
        assert_eq!(label.color(), [10, 20, 30]);
    }
}
