//! Decorative "open book" placeholder served as plain SVG.

use super::artifact::{CacheDirective, GeneratedArtifact, ImageKind};
use super::placeholder::{hex, hsl_to_rgb};
use super::request::Dimensions;
use super::seed::SeedSource;

/// Background lightness above which the icon is drawn dark.
pub const CONTRAST_THRESHOLD: f32 = 60.0;

/// A random pastel background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pastel {
    /// Hue in degrees.
    pub hue: f32,
    /// Saturation in percent.
    pub saturation: f32,
    /// Lightness in percent.
    pub lightness: f32,
}

impl Pastel {
    /// Draw a pastel from the seed source.
    pub fn random(source: &dyn SeedSource) -> Self {
        Self {
            hue: f32::from(source.random_hue() % 360),
            saturation: 40.0 + source.random_unit() * 30.0,
            lightness: 55.0 + source.random_unit() * 35.0,
        }
    }

    /// Foreground color readable against this background.
    pub fn foreground(&self) -> (u8, u8, u8) {
        if self.lightness > CONTRAST_THRESHOLD {
            hsl_to_rgb(self.hue, self.saturation, 25.0)
        } else {
            (255, 255, 255)
        }
    }
}

/// Build the open-book icon SVG.
pub fn open_book_svg(dimensions: Dimensions, background: Pastel) -> String {
    let Dimensions { width, height } = dimensions;
    let bg = hex(hsl_to_rgb(
        background.hue,
        background.saturation,
        background.lightness,
    ));
    let fg = hex(background.foreground());

    // icon drawn in a 100x100 box, scaled to 40% of the short side
    let scale = dimensions.min_side() as f32 * 0.4 / 100.0;
    let tx = width as f32 / 2.0 - 50.0 * scale;
    let ty = height as f32 / 2.0 - 50.0 * scale;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
<rect width="{width}" height="{height}" fill="{bg}"/>
<g transform="translate({tx:.2} {ty:.2}) scale({scale:.4})" fill="none" stroke="{fg}" stroke-width="4" stroke-linejoin="round" stroke-linecap="round">
<path d="M50 25 C38 16 20 14 6 18 L6 82 C20 78 38 80 50 89 Z"/>
<path d="M50 25 C62 16 80 14 94 18 L94 82 C80 78 62 80 50 89 Z"/>
<path d="M50 25 L50 89"/>
<path d="M16 34 C26 32 36 33 42 37 M16 48 C26 46 36 47 42 51 M58 37 C64 33 74 32 84 34 M58 51 C64 47 74 46 84 48" stroke-opacity="0.6"/>
</g>
</svg>"##
    )
}

/// Generate the vector placeholder. Always randomized.
pub fn render_open_book(dimensions: Dimensions, source: &dyn SeedSource) -> GeneratedArtifact {
    let svg = open_book_svg(dimensions, Pastel::random(source));
    GeneratedArtifact::new(
        svg.into_bytes(),
        ImageKind::Svg,
        CacheDirective::for_determinism(false),
    )
}
