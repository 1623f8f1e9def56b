//! Error types for the cache manager.
//!
//! The cache itself never fails: lookups on present keys, sweeps and flag
//! toggles are infallible. The only failure surfaced through this crate is a
//! resource constructor failing on a cache miss, which propagates to the
//! caller of the lookup and leaves the container untouched.

use thiserror::Error;

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors surfaced by cached-resource lookups.
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CacheError {
    /// A resource constructor failed during a cache miss. No entry was
    /// inserted; a later lookup on the same key will attempt construction
    /// again.
    #[error("failed to construct cached resource '{resource}': {reason}")]
    ConstructionFailed {
        /// Conventional name of the resource kind, e.g. `bokeh_kernels`.
        resource: String,
        /// Human-readable failure reason.
        reason: String,
        /// Underlying error from the constructor, when available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CacheError {
    /// Create a construction failure with a plain reason.
    pub fn construction(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConstructionFailed {
            resource: resource.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a construction failure wrapping an underlying error.
    pub fn construction_with_source(
        resource: impl Into<String>,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConstructionFailed {
            resource: resource.into(),
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_displays_resource_and_reason() {
        let err = CacheError::construction("bokeh_kernels", "kernel size must be positive");
        assert_eq!(
            err.to_string(),
            "failed to construct cached resource 'bokeh_kernels': kernel size must be positive"
        );
    }

    #[test]
    fn construction_error_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing LUT file");
        let err = CacheError::construction_with_source("ocio_color_space_conversion_shaders", "LUT load failed", io);
        let source = std::error::Error::source(&err).expect("source should be set");
        assert!(source.to_string().contains("missing LUT file"));
    }
}
