use thiserror::Error;

/// Errors emitted while reading or validating the site config.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("site config IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid site config document.
    #[error("site config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
