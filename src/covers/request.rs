//! Request validation: dimensions, quality and mode classification.

use crate::error::{AppError, Result};

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 2000;

/// Reserved first path segment requesting a generated placeholder.
pub const PLACEHOLDER_TOKEN: &str = "@placeholder";

/// Quality used when the request carries none.
pub const DEFAULT_QUALITY: u8 = 80;

/// Validated output dimensions, both within `1..=MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Parse raw path segments into dimensions.
    pub fn parse(width: &str, height: &str) -> Result<Self> {
        match (parse_dimension(width), parse_dimension(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(AppError::InvalidDimensions),
        }
    }

    /// Smaller of the two sides.
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// Parse one dimension. Only plain ASCII digits are accepted.
fn parse_dimension(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: u32 = raw.parse().ok()?;
    (1..=MAX_DIMENSION).contains(&value).then_some(value)
}

/// Parse the `q` query value, clamping to the codec range `1..=100`.
///
/// Absent or non-numeric values fall back to `default`.
pub fn parse_quality(raw: Option<&str>, default: u8) -> u8 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|q| q.is_finite())
        .map(|q| q.trunc().clamp(1.0, 100.0) as u8)
        .unwrap_or_else(|| default.clamp(1, 100))
}

/// How the request should be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Look up a stored source image.
    RealImage,
    /// Generate a placeholder.
    Placeholder,
}

/// A validated cover request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Requested output size.
    pub dimensions: Dimensions,
    /// Real image or explicit placeholder.
    pub mode: RequestMode,
    /// Path segments after the dimensions (empty segments dropped).
    pub path_segments: Vec<String>,
    /// Seed for deterministic placeholders. Only kept in placeholder mode.
    pub book_id: Option<String>,
    /// Output quality, `1..=100`.
    pub quality: u8,
}

impl ImageRequest {
    /// Validate the raw request parts.
    pub fn parse(
        width: &str,
        height: &str,
        path: &str,
        book_id: Option<String>,
        quality: Option<&str>,
        default_quality: u8,
    ) -> Result<Self> {
        let dimensions = Dimensions::parse(width, height)?;
        let quality = parse_quality(quality, default_quality);

        let path_segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let mode = match path_segments.first() {
            Some(first) if first == PLACEHOLDER_TOKEN => RequestMode::Placeholder,
            _ => RequestMode::RealImage,
        };

        let book_id = match mode {
            RequestMode::Placeholder => book_id.filter(|id| !id.is_empty()),
            RequestMode::RealImage => None,
        };

        Ok(Self {
            dimensions,
            mode,
            path_segments,
            book_id,
            quality,
        })
    }
}
