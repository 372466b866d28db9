//! Glue for catalog collaborators that link to covers.

pub mod cover;

pub use cover::{CoverRef, cover_url};
