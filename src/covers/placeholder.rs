//! Rasterized cover placeholders.
//!
//! The artwork is a gradient at the seed hue, a diagonal hatch, an inset
//! panel and a `{width}×{height}` label, rendered through [`super::raster`].

use super::artifact::{CacheDirective, GeneratedArtifact, ImageKind};
use super::raster;
use super::request::Dimensions;
use super::seed::HueSeed;
use crate::error::Result;

/// Saturation of the gradient, in percent.
const SATURATION: f32 = 30.0;

/// Gradient lightness at the top, in percent.
const LIGHTNESS_TOP: f32 = 85.0;

/// Gradient lightness at the bottom, in percent.
const LIGHTNESS_BOTTOM: f32 = 75.0;

/// Side of the hatch pattern tile in user units.
const HATCH_TILE: u32 = 20;

/// Label font size for the given dimensions.
///
/// Wide thumbnails get a smaller relative label.
pub fn font_size(dimensions: Dimensions) -> f32 {
    let ratio = if dimensions.width > 300 { 0.08 } else { 0.10 };
    dimensions.min_side() as f32 * ratio
}

/// Build the SVG description of a placeholder.
pub fn placeholder_svg(dimensions: Dimensions, hue: u16) -> String {
    let Dimensions { width, height } = dimensions;
    let hue = f32::from(hue % 360);

    let top = hex(hsl_to_rgb(hue, SATURATION, LIGHTNESS_TOP));
    let bottom = hex(hsl_to_rgb(hue, SATURATION, LIGHTNESS_BOTTOM));
    let ink = hex(hsl_to_rgb(hue, SATURATION, 35.0));

    let panel_x = width as f32 * 0.05;
    let panel_y = height as f32 * 0.05;
    let panel_w = width as f32 * 0.9;
    let panel_h = height as f32 * 0.9;
    let stroke = (dimensions.min_side() as f32 * 0.01).max(1.0);

    let size = font_size(dimensions);
    let label_y = height as f32 / 2.0 + size * 0.35;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
<defs>
<linearGradient id="bg" x1="0" y1="0" x2="0" y2="1">
<stop offset="0" stop-color="{top}"/>
<stop offset="1" stop-color="{bottom}"/>
</linearGradient>
<pattern id="hatch" width="{tile}" height="{tile}" patternUnits="userSpaceOnUse" patternTransform="rotate(45)">
<line x1="0" y1="0" x2="0" y2="{tile}" stroke="#ffffff" stroke-opacity="0.25" stroke-width="4"/>
</pattern>
</defs>
<rect width="{width}" height="{height}" fill="url(#bg)"/>
<rect width="{width}" height="{height}" fill="url(#hatch)"/>
<rect x="{panel_x:.2}" y="{panel_y:.2}" width="{panel_w:.2}" height="{panel_h:.2}" fill="#ffffff" fill-opacity="0.15" stroke="{ink}" stroke-opacity="0.4" stroke-width="{stroke:.2}"/>
<text x="{cx:.2}" y="{label_y:.2}" font-family="sans-serif" font-size="{size:.2}" font-weight="bold" fill="{ink}" text-anchor="middle">{width}×{height}</text>
</svg>"##,
        tile = HATCH_TILE,
        cx = width as f32 / 2.0,
    )
}

/// Generate a placeholder PNG.
pub fn render_placeholder(
    dimensions: Dimensions,
    seed: HueSeed,
    quality: u8,
) -> Result<GeneratedArtifact> {
    let svg = placeholder_svg(dimensions, seed.hue);
    let png = raster::rasterize_png(&svg, quality)?;

    Ok(GeneratedArtifact::new(
        png,
        ImageKind::Png,
        CacheDirective::for_determinism(seed.deterministic),
    ))
}

/// Convert HSL (degrees, percent, percent) to RGB.
pub(crate) fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// `#rrggbb` notation.
pub(crate) fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
