use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Width or height missing, non-numeric or outside `1..=2000`.
    #[error("Invalid dimensions")]
    InvalidDimensions,

    /// Requested path escapes the cover root.
    #[error("Invalid path")]
    InvalidPath,

    /// Source image could not be decoded or encoded.
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Processing failure outside the image codec.
    #[error("Processing error: {0}")]
    Processing(String),

    /// SVG parsing or rasterization error.
    #[error("Render error: {0}")]
    Render(String),

    /// Processing exceeded its deadline.
    #[error("Processing deadline exceeded")]
    Timeout,

    /// Processing was abandoned because the request went away.
    #[error("Processing cancelled")]
    Cancelled,

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error produced by a computation shared between concurrent requests.
    #[error("{0}")]
    Shared(Arc<AppError>),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidDimensions | AppError::InvalidPath => StatusCode::BAD_REQUEST,
            AppError::Shared(inner) => inner.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable message shown to clients. Details stay in the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidDimensions => "Invalid dimensions",
            AppError::InvalidPath => "Invalid path",
            AppError::Shared(inner) => inner.public_message(),
            AppError::Image(_) | AppError::Processing(_) | AppError::Render(_) => {
                "Image processing failed"
            }
            AppError::Timeout => "Image processing timed out",
            _ => "Internal error",
        }
    }
}

impl From<Arc<AppError>> for AppError {
    fn from(err: Arc<AppError>) -> Self {
        AppError::Shared(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_client_error() {
            tracing::warn!(error = %self, "Rejected request");
        } else {
            tracing::error!(error = %self, "Request error");
        }

        (status, self.public_message()).into_response()
    }
}

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, AppError>;
