//! Generated artifacts and their cache policy.

use axum::body::Bytes;

/// Output encoding of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Rasterized placeholder.
    Png,
    /// Vector placeholder.
    Svg,
    /// Re-encoded source image.
    Webp,
}

impl ImageKind {
    /// MIME type for this encoding.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Svg => "image/svg+xml",
            ImageKind::Webp => "image/webp",
        }
    }
}

/// `Cache-Control` policy for an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDirective {
    /// Output is a pure function of the request.
    Immutable,
    /// Output is randomized and must not be reused.
    NoStore,
}

impl CacheDirective {
    /// Policy for output that is, or is not, a pure function of its inputs.
    pub fn for_determinism(deterministic: bool) -> Self {
        if deterministic {
            CacheDirective::Immutable
        } else {
            CacheDirective::NoStore
        }
    }

    /// Header value.
    pub fn header_value(&self) -> &'static str {
        match self {
            CacheDirective::Immutable => "public, max-age=31536000, immutable",
            CacheDirective::NoStore => "no-store",
        }
    }
}

/// Encoded image ready to be sent.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// Encoded image bytes.
    pub bytes: Bytes,
    /// Encoding.
    pub kind: ImageKind,
    /// Cache policy.
    pub cache: CacheDirective,
}

impl GeneratedArtifact {
    /// Build an artifact.
    pub fn new(bytes: impl Into<Bytes>, kind: ImageKind, cache: CacheDirective) -> Self {
        Self {
            bytes: bytes.into(),
            kind,
            cache,
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }
}
