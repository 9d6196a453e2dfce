//! Template source abstraction.
//!
//! The page markup lives outside the binary (an object store in production)
//! and is fetched fresh on every render, so deploys of the markup need no
//! server restart.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur fetching or rendering the page template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },
    #[error("Template fetch failed: {0}")]
    FetchFailed(String),
    #[error("Template is not valid UTF-8: {0}")]
    InvalidEncoding(String),
    #[error("Template render failed: {0}")]
    RenderFailed(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Fetches the page template document.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetches the raw template text. Called on every render, no caching.
    async fn fetch(&self) -> Result<String>;
}
