//! SVG rasterization to PNG.

use crate::error::{AppError, Result};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use std::path::Path;
use std::sync::{Arc, OnceLock};

static FONT_DB: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

/// Initialize the shared font database, loading system fonts plus any
/// `.ttf`/`.otf` files from `extra_dir`.
///
/// Only the first call has an effect.
pub fn init_fonts(extra_dir: Option<&Path>) -> Arc<fontdb::Database> {
    FONT_DB
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();

            if let Some(dir) = extra_dir {
                match std::fs::read_dir(dir) {
                    Ok(entries) => {
                        for path in entries.flatten().map(|e| e.path()) {
                            let is_font = path
                                .extension()
                                .and_then(|e| e.to_str())
                                .is_some_and(|e| {
                                    e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf")
                                });
                            if is_font && let Err(e) = db.load_font_file(&path) {
                                tracing::warn!(path = %path.display(), error = %e, "Failed to load font");
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!(dir = %dir.display(), error = %e, "Failed to read font directory");
                    }
                }
            }

            tracing::debug!(faces = db.len(), "Font database ready");
            Arc::new(db)
        })
        .clone()
}

/// PNG compression effort for a 1-100 quality value.
///
/// PNG is lossless, so quality trades encode time for size only.
pub fn png_compression(quality: u8) -> png::Compression {
    match quality {
        0..=33 => png::Compression::Fast,
        34..=66 => png::Compression::Default,
        _ => png::Compression::Best,
    }
}

/// Render an SVG document and encode it as PNG.
pub fn rasterize_png(svg: &str, quality: u8) -> Result<Vec<u8>> {
    let opts = usvg::Options {
        fontdb: init_fonts(None),
        font_family: "sans-serif".to_string(),
        ..Default::default()
    };

    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| AppError::Render(format!("Failed to parse SVG: {e}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| AppError::Render("Failed to create pixmap".to_string()))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, size.width(), size.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png_compression(quality));
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::Render(format!("PNG write_header error: {e}")))?;
        writer
            .write_image_data(&rgba)
            .map_err(|e| AppError::Render(format!("PNG write_image_data error: {e}")))?;
        writer
            .finish()
            .map_err(|e| AppError::Render(format!("PNG finish error: {e}")))?;
    }

    Ok(out)
}
