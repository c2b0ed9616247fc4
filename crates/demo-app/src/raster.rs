//! Naive single-line rasterizer for the demo label.
//!
//! Lays glyphs out left to right by advance width; no shaping, no
//! wrapping. Enough to show a loaded typeface on screen-like output.

use std::path::Path;

use anyhow::Result;
use image::{Rgba, RgbaImage};
use quill_text::TextLabel;
use swash::scale::image::{Content, Image};

const DPI: f32 = 96.0;
const MARGIN: u32 = 16;
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rasterize the label's line of text to `output` as a PNG.
///
/// A label still carrying a faceless default handle produces a blank
/// canvas.
pub fn render_label(label: &TextLabel, output: &Path) -> Result<()> {
    let Some(face) = label.typeface().face() else {
        log::warn!("label has no loaded face, writing a blank canvas");
        let blank = RgbaImage::from_pixel(640, 120, WHITE);
        blank.save(output)?;
        return Ok(());
    };

    let scaled = face.metrics().scale_from_points(label.size_pt(), DPI);
    let px_size = scaled.font_size;

    // Measure first so the canvas fits the line.
    let mut line_width = 0.0f32;
    for ch in label.text().chars() {
        line_width += face.advance_width(face.glyph_id(ch), px_size);
    }

    let width = (line_width.ceil() as u32 + MARGIN * 2).max(1);
    let height = (scaled.line_height().ceil() as u32 + MARGIN * 2).max(1);
    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);

    let baseline = MARGIN as f32 + scaled.ascent;
    let mut pen_x = MARGIN as f32;
    for ch in label.text().chars() {
        let glyph = face.glyph_id(ch);
        if let Some(rendered) = face.render_glyph(glyph, px_size) {
            if matches!(rendered.content, Content::Mask) {
                blit_mask(&mut canvas, &rendered, pen_x, baseline, label.color());
            }
        }
        pen_x += face.advance_width(glyph, px_size);
    }

    canvas.save(output)?;
    Ok(())
}

/// Composite an alpha-mask glyph image onto the canvas at the pen
/// position, relative to the baseline.
fn blit_mask(canvas: &mut RgbaImage, glyph: &Image, pen_x: f32, baseline: f32, color: [u8; 3]) {
    let left = pen_x as i32 + glyph.placement.left;
    let top = baseline as i32 - glyph.placement.top;
    let width = glyph.placement.width as i32;
    let height = glyph.placement.height as i32;

    for row in 0..height {
        for col in 0..width {
            let alpha = glyph.data[(row * width + col) as usize];
            if alpha == 0 {
                continue;
            }
            let x = left + col;
            let y = top + row;
            if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
                continue;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            *pixel = blend(*pixel, color, alpha);
        }
    }
}

fn blend(dst: Rgba<u8>, color: [u8; 3], alpha: u8) -> Rgba<u8> {
    let a = alpha as u32;
    let inv = 255 - a;
    let mix = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * inv) / 255) as u8;
    Rgba([
        mix(color[0], dst[0]),
        mix(color[1], dst[1]),
        mix(color[2], dst[2]),
        255,
    ])
}
