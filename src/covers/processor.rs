//! Stored cover processing: conditional contain-fit resize and WebP encoding.

use super::artifact::{CacheDirective, GeneratedArtifact, ImageKind};
use super::request::Dimensions;
use crate::error::{AppError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, Limits, Rgba, RgbaImage};
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Decoder limits for untrusted source files.
#[derive(Debug, Clone, Copy)]
pub struct DecodeLimits {
    /// Largest accepted width or height.
    pub max_dimension: u32,
    /// Largest decoder allocation in bytes.
    pub max_alloc: u64,
}

impl DecodeLimits {
    fn to_image_limits(self) -> Limits {
        let mut limits = Limits::default();
        limits.max_image_width = Some(self.max_dimension);
        limits.max_image_height = Some(self.max_dimension);
        limits.max_alloc = Some(self.max_alloc);
        limits
    }
}

/// Whether a source of size `native` has to be shrunk to honor `requested`.
pub fn needs_resize(native: (u32, u32), requested: Dimensions) -> bool {
    requested.width < native.0 || requested.height < native.1
}

/// Contain-fit `img` into `bounds`, centered on a transparent canvas.
///
/// Only called when one side must shrink, so the scale is always below one.
pub fn contain_fit(img: &DynamicImage, bounds: Dimensions) -> RgbaImage {
    let (src_w, src_h) = (img.width(), img.height());
    let scale = f64::min(
        f64::from(bounds.width) / f64::from(src_w),
        f64::from(bounds.height) / f64::from(src_h),
    );

    let fit_w = ((f64::from(src_w) * scale).round() as u32).clamp(1, bounds.width);
    let fit_h = ((f64::from(src_h) * scale).round() as u32).clamp(1, bounds.height);
    let resized = imageops::resize(&img.to_rgba8(), fit_w, fit_h, FilterType::Lanczos3);

    let mut canvas = RgbaImage::from_pixel(bounds.width, bounds.height, Rgba([0, 0, 0, 0]));
    let x = i64::from((bounds.width - fit_w) / 2);
    let y = i64::from((bounds.height - fit_h) / 2);
    imageops::overlay(&mut canvas, &resized, x, y);
    canvas
}

/// Encode RGBA pixels as lossy WebP.
pub fn encode_webp(pixels: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let encoder = webp::Encoder::from_rgba(pixels.as_raw(), pixels.width(), pixels.height());
    let encoded = encoder
        .encode_simple(false, f32::from(quality.clamp(1, 100)))
        .map_err(|e| AppError::Processing(format!("WebP encode error: {e:?}")))?;
    Ok(encoded.to_vec())
}

/// Load, conditionally shrink and re-encode a stored cover.
///
/// Checks `cancel` between stages and stops early once it fires.
pub fn process_cover(
    path: &Path,
    requested: Dimensions,
    quality: u8,
    limits: DecodeLimits,
    cancel: &CancellationToken,
) -> Result<GeneratedArtifact> {
    let mut reader = ImageReader::open(path)?.with_guessed_format()?;
    reader.limits(limits.to_image_limits());
    let img = reader.decode()?;

    if cancel.is_cancelled() {
        return Err(AppError::Cancelled);
    }

    let native = (img.width(), img.height());
    let pixels = if needs_resize(native, requested) {
        tracing::debug!(
            path = %path.display(),
            native_width = native.0,
            native_height = native.1,
            width = requested.width,
            height = requested.height,
            "Shrinking cover"
        );
        contain_fit(&img, requested)
    } else {
        img.to_rgba8()
    };

    if cancel.is_cancelled() {
        return Err(AppError::Cancelled);
    }

    let webp = encode_webp(&pixels, quality)?;

    Ok(GeneratedArtifact::new(
        webp,
        ImageKind::Webp,
        CacheDirective::Immutable,
    ))
}
