//! cover-forge: on-demand cover images for a book library.
//!
//! Given requested pixel dimensions and either a path below a cover root or
//! the `@placeholder` sentinel, the server produces a correctly sized image
//! and streams it with a cache policy matching how deterministic it is.
//!
//! # Features
//!
//! - Contain-fit shrinking of stored covers, never upscaling
//! - WebP re-encoding of every stored cover
//! - Hue-seeded PNG placeholders, byte-identical per book
//! - Decorative SVG placeholders
//! - Canonical path containment under the cover root
//! - Bounded concurrency, processing deadline and request coalescing

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Configuration and CLI.
pub mod config;
/// Cover synthesis and processing.
pub mod covers;
/// Error types.
pub mod error;
/// Collaborator-facing cover references.
pub mod library;
/// HTTP server.
pub mod server;

#[cfg(test)]
mod tests;

pub use config::{Cli, Command, Config};
pub use error::{AppError, Result};
pub use server::AppState;
