//! Book cover references and the URLs that serve them.

use crate::covers::request::PLACEHOLDER_TOKEN;

/// Prefix under which covers are served.
pub const COVERS_PREFIX: &str = "/covers";

/// A book's stored cover reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverRef {
    /// No stored art; the book gets a generated placeholder.
    Placeholder,
    /// Path relative to the cover root, as normalized segments.
    Path(Vec<String>),
}

impl CoverRef {
    /// Normalize a stored reference string.
    ///
    /// Accepts the placeholder sentinel, an empty value, or a relative path.
    /// Leading slashes, a leading `covers/` directory, backslashes and empty
    /// or `.` segments are dropped.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == PLACEHOLDER_TOKEN {
            return CoverRef::Placeholder;
        }

        let normalized = raw.replace('\\', "/");
        let mut segments: Vec<String> = normalized
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect();

        if segments.len() > 1 && segments[0] == "covers" {
            segments.remove(0);
        }

        if segments.is_empty() {
            CoverRef::Placeholder
        } else {
            CoverRef::Path(segments)
        }
    }
}

/// Build the URL for a book cover at the given size.
pub fn cover_url(book_id: &str, cover: &CoverRef, width: u32, height: u32) -> String {
    match cover {
        CoverRef::Placeholder => format!(
            "{COVERS_PREFIX}/{width}/{height}/{PLACEHOLDER_TOKEN}?bookId={}",
            urlencoding::encode(book_id)
        ),
        CoverRef::Path(segments) => {
            let encoded: Vec<_> = segments
                .iter()
                .map(|s| urlencoding::encode(s).into_owned())
                .collect();
            format!("{COVERS_PREFIX}/{width}/{height}/{}", encoded.join("/"))
        }
    }
}
