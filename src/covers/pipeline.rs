//! Request dispatch for cover images.

use super::artifact::GeneratedArtifact;
use super::placeholder;
use super::processor::{self, DecodeLimits};
use super::request::{Dimensions, ImageRequest, RequestMode};
use super::root::{CoverRoot, Resolution};
use super::seed::{HueSeed, SeedSource};
use super::vector;
use crate::config::Config;
use crate::error::{AppError, Result};
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Key of a deterministic artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtifactKey {
    /// Placeholder seeded by a book identifier.
    Placeholder {
        /// Output size.
        dimensions: Dimensions,
        /// Seeding book identifier.
        book_id: String,
        /// Output quality.
        quality: u8,
    },
    /// Processed source file.
    Source {
        /// Output size.
        dimensions: Dimensions,
        /// Canonical source path.
        path: PathBuf,
        /// Output quality.
        quality: u8,
    },
}

/// CPU-bound work selected by resolution.
#[derive(Debug, Clone)]
enum Job {
    Placeholder {
        dimensions: Dimensions,
        seed: HueSeed,
        book_id: Option<String>,
        quality: u8,
    },
    Source {
        dimensions: Dimensions,
        path: PathBuf,
        quality: u8,
    },
}

impl Job {
    fn key(&self) -> Option<ArtifactKey> {
        match self {
            Job::Placeholder {
                dimensions,
                seed,
                book_id: Some(book_id),
                quality,
            } if seed.deterministic => Some(ArtifactKey::Placeholder {
                dimensions: *dimensions,
                book_id: book_id.clone(),
                quality: *quality,
            }),
            Job::Placeholder { .. } => None,
            Job::Source {
                dimensions,
                path,
                quality,
            } => Some(ArtifactKey::Source {
                dimensions: *dimensions,
                path: path.clone(),
                quality: *quality,
            }),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Job::Placeholder { .. } => "placeholder",
            Job::Source { .. } => "source",
        }
    }

    fn run(self, limits: DecodeLimits, cancel: &CancellationToken) -> Result<GeneratedArtifact> {
        match self {
            Job::Placeholder {
                dimensions,
                seed,
                quality,
                ..
            } => placeholder::render_placeholder(dimensions, seed, quality),
            Job::Source {
                dimensions,
                path,
                quality,
            } => processor::process_cover(&path, dimensions, quality, limits, cancel),
        }
    }
}

/// Validated-request to artifact pipeline.
pub struct CoverPipeline {
    root: CoverRoot,
    seeds: Arc<dyn SeedSource>,
    limits: DecodeLimits,
    pub(crate) permits: Arc<Semaphore>,
    timeout: Duration,
    cache: Option<Cache<ArtifactKey, GeneratedArtifact>>,
}

impl CoverPipeline {
    /// Build a pipeline from configuration.
    pub fn new(root: CoverRoot, config: &Config, seeds: Arc<dyn SeedSource>) -> Self {
        let processing = &config.processing;
        let cache = config.cache.enabled.then(|| {
            Cache::builder()
                .weigher(|_k, v: &GeneratedArtifact| {
                    u32::try_from(v.bytes.len()).unwrap_or(u32::MAX)
                })
                .max_capacity(config.cache.max_bytes)
                .time_to_live(Duration::from_secs(config.cache.ttl_seconds))
                .build()
        });

        Self {
            root,
            seeds,
            limits: DecodeLimits {
                max_dimension: processing.max_source_dimension,
                max_alloc: processing.max_decode_bytes,
            },
            permits: Arc::new(Semaphore::new(processing.max_concurrent.max(1))),
            timeout: Duration::from_millis(processing.timeout_ms.max(1)),
            cache,
        }
    }

    /// Produce the artifact for a validated cover request.
    pub async fn cover(&self, request: ImageRequest) -> Result<GeneratedArtifact> {
        let ImageRequest {
            dimensions,
            mode,
            path_segments,
            book_id,
            quality,
        } = request;

        let job = match mode {
            RequestMode::Placeholder => Job::Placeholder {
                dimensions,
                seed: HueSeed::resolve(book_id.as_deref(), self.seeds.as_ref()),
                book_id,
                quality,
            },
            RequestMode::RealImage => match self.root.resolve(path_segments.clone()).await? {
                Resolution::Found(path) => Job::Source {
                    dimensions,
                    path,
                    quality,
                },
                Resolution::Missing => {
                    tracing::debug!(path = %path_segments.join("/"), "Cover source missing, serving placeholder");
                    Job::Placeholder {
                        dimensions,
                        seed: HueSeed::random(self.seeds.as_ref()),
                        book_id: None,
                        quality,
                    }
                }
                Resolution::Invalid => {
                    tracing::warn!(path = %path_segments.join("/"), "Cover path escapes root");
                    return Err(AppError::InvalidPath);
                }
            },
        };

        let start = Instant::now();
        let label = job.label();
        let artifact = match (job.key(), &self.cache) {
            (Some(key), Some(cache)) => cache.try_get_with(key, self.execute(job)).await?,
            _ => self.execute(job).await?,
        };

        tracing::debug!(
            kind = label,
            width = dimensions.width,
            height = dimensions.height,
            quality,
            bytes = artifact.bytes.len(),
            elapsed = ?start.elapsed(),
            "Cover ready"
        );

        Ok(artifact)
    }

    /// Produce the decorative vector placeholder.
    pub fn open_book(&self, dimensions: Dimensions) -> GeneratedArtifact {
        vector::render_open_book(dimensions, self.seeds.as_ref())
    }

    /// Run a job on the blocking pool under the concurrency bound and deadline.
    async fn execute(&self, job: Job) -> Result<GeneratedArtifact> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| AppError::Internal(format!("Processing semaphore closed: {e}")))?;

        let limits = self.limits;
        run_guarded(CancellationToken::new(), self.timeout, move |cancel| {
            let _permit = permit;
            job.run(limits, cancel)
        })
        .await
    }
}

/// Run `work` on the blocking pool, giving up after `deadline`.
///
/// `cancel` is cancelled when the deadline passes or the returned future is
/// dropped; `work` is expected to check it between steps.
pub(crate) async fn run_guarded<T, F>(
    cancel: CancellationToken,
    deadline: Duration,
    work: F,
) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&CancellationToken) -> Result<T> + Send + 'static,
{
    let _guard = cancel.clone().drop_guard();
    let worker_cancel = cancel.clone();

    let handle = tokio::task::spawn_blocking(move || {
        if worker_cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        work(&worker_cancel)
    });

    match tokio::time::timeout(deadline, handle).await {
        Ok(joined) => {
            joined.map_err(|e| AppError::Internal(format!("Processing task failed: {e}")))?
        }
        Err(_) => {
            cancel.cancel();
            Err(AppError::Timeout)
        }
    }
}
