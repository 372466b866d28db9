//! Cover image synthesis and processing.
//!
//! A request flows through [`request`] validation, [`root`] resolution and
//! then either [`placeholder`] synthesis or [`processor`] re-encoding; the
//! [`pipeline`] drives those steps and hands back a [`GeneratedArtifact`].

pub mod artifact;
pub mod pipeline;
pub mod placeholder;
pub mod processor;
pub mod raster;
pub mod request;
pub mod root;
pub mod seed;
pub mod vector;

pub use artifact::{CacheDirective, GeneratedArtifact, ImageKind};
pub use pipeline::CoverPipeline;
pub use request::{Dimensions, ImageRequest, RequestMode};
pub use root::{CoverRoot, Resolution};
pub use seed::{FixedSeeds, HueSeed, SeedSource, ThreadRngSeeds};
