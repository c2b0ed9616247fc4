use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use quill_config::QuillConfig;
use quill_resources::{Context, ResourceId, Resources};
use quill_text::TextLabel;
use quill_typeface::Typefaces;

mod raster;

/// Identifier the demo font payload is registered under.
const SAMPLE_FONT: ResourceId = ResourceId::new(1);

const SAMPLE_TEXT: &str = "And there were three little bears, sitting on chairs. \
    Two little kittens and a pair of mittens.";

fn main() -> Result<()> {
    env_logger::init();
    let config = QuillConfig::load();

    let mut resources = Resources::new();
    if let Some(font) = config.text.font.as_ref() {
        log::info!("using configured font {}", font.display());
        resources.register_file(SAMPLE_FONT, font);
    } else if let Some(data) = system_sans_serif() {
        log::info!("using a system sans-serif face");
        resources.register_bytes(SAMPLE_FONT, data);
    } else {
        log::warn!("no usable font found; the default typeface will be used");
    }

    let context = Arc::new(Context::new(resources, std::env::temp_dir()));
    let faces = Typefaces::new();

    let mut label = TextLabel::new(context)
        .with_text(
            config
                .demo
                .sample_text
                .clone()
                .unwrap_or_else(|| SAMPLE_TEXT.to_string()),
        )
        .with_size_pt(config.text.text_size.unwrap_or(24.0))
        .with_color([24, 24, 96]);
    faces.apply(&mut label, SAMPLE_FONT);

    let output = config
        .demo
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("quill-demo.png"));
    raster::render_label(&label, &output)
        .with_context(|| format!("rendering demo text to {}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}

/// Raw bytes of a system sans-serif face, if the host has one.
fn system_sans_serif() -> Option<Vec<u8>> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = db.query(&query)?;
    db.with_face_data(id, |data, _index| data.to_vec())
}
