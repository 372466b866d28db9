//! Scoped handle over the cover root directory.
//!
//! Every real-image lookup goes through [`CoverRoot::resolve`], which only
//! hands out paths whose canonical form is a descendant of the canonical
//! root. Symlinks are followed before the containment check, so a link
//! inside the root that points elsewhere is rejected.

use crate::error::{AppError, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Outcome of resolving a request path under the cover root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Canonical path of an existing file inside the root.
    Found(PathBuf),
    /// Nothing usable at that path.
    Missing,
    /// The path escapes the root.
    Invalid,
}

/// Capability to read files below one directory.
#[derive(Debug, Clone)]
pub struct CoverRoot {
    canonical: PathBuf,
}

impl CoverRoot {
    /// Open the root. The directory must exist.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let canonical = root.canonicalize().map_err(|e| {
            AppError::Config(format!(
                "Cover root {} is not accessible: {}",
                root.display(),
                e
            ))
        })?;

        if !canonical.is_dir() {
            return Err(AppError::Config(format!(
                "Cover root {} is not a directory",
                root.display()
            )));
        }

        Ok(Self { canonical })
    }

    /// Canonical root path.
    pub fn path(&self) -> &Path {
        &self.canonical
    }

    /// Resolve path segments off the async runtime.
    pub async fn resolve(&self, segments: Vec<String>) -> Result<Resolution> {
        let root = self.clone();
        tokio::task::spawn_blocking(move || root.resolve_sync(&segments))
            .await
            .map_err(|e| AppError::Internal(format!("spawn_blocking failed: {e}")))?
    }

    /// Resolve path segments, classifying the result.
    pub fn resolve_sync<S: AsRef<str>>(&self, segments: &[S]) -> Result<Resolution> {
        let mut relative = PathBuf::new();
        for segment in segments {
            let segment = segment.as_ref();
            if !is_plain_segment(segment) {
                return Ok(Resolution::Invalid);
            }
            relative.push(segment);
        }

        if relative.as_os_str().is_empty() {
            return Ok(Resolution::Missing);
        }

        let path = self.canonical.join(&relative);

        match std::fs::symlink_metadata(&path) {
            Ok(meta) => {
                let canonical = match path.canonicalize() {
                    Ok(canonical) => canonical,
                    // dangling symlink
                    Err(_) if meta.file_type().is_symlink() => return Ok(Resolution::Invalid),
                    Err(e) => return Err(e.into()),
                };

                if !canonical.starts_with(&self.canonical) {
                    return Ok(Resolution::Invalid);
                }

                if canonical.is_file() {
                    Ok(Resolution::Found(canonical))
                } else {
                    Ok(Resolution::Missing)
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound || e.kind() == ErrorKind::NotADirectory => {
                self.check_nearest_ancestor(&path)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// For a missing path, make sure the deepest existing ancestor still lives
    /// inside the root, so a symlinked directory cannot be probed for names.
    fn check_nearest_ancestor(&self, path: &Path) -> Result<Resolution> {
        let mut ancestor = path;
        while let Some(parent) = ancestor.parent() {
            match std::fs::symlink_metadata(parent) {
                Ok(meta) => {
                    let canonical = match parent.canonicalize() {
                        Ok(canonical) => canonical,
                        Err(_) if meta.file_type().is_symlink() => {
                            return Ok(Resolution::Invalid);
                        }
                        Err(e) => return Err(e.into()),
                    };

                    return Ok(if canonical.starts_with(&self.canonical) {
                        Resolution::Missing
                    } else {
                        Resolution::Invalid
                    });
                }
                Err(e)
                    if e.kind() == ErrorKind::NotFound || e.kind() == ErrorKind::NotADirectory =>
                {
                    ancestor = parent;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Resolution::Missing)
    }
}

/// A segment is plain when it names exactly one normal path component.
fn is_plain_segment(segment: &str) -> bool {
    if segment.contains(['\\', '\0']) {
        return false;
    }

    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
