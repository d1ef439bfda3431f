//! Error types for out-of-band rendering
//!
//! Two shapes only: the renderer's own missing-binding failure, and the
//! opaque pass-through of anything the host raises. There is no recovery
//! and no retry at this layer.

use offstage_host::HostError;

/// Errors surfaced by [`Renderer::render`]
///
/// [`Renderer::render`]: crate::Renderer::render
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The facade was never bound to a host descriptor
    ///
    /// Always a caller/configuration bug; raised before any request or
    /// instance is built. Not retryable.
    #[error("missing host: renderer was never bound to a host descriptor")]
    MissingHost,

    /// Opaque failure raised by the host's build or render entry points
    ///
    /// Forwarded unchanged; downcast to the host's concrete error types
    /// for details.
    #[error("{0}")]
    Host(HostError),
}

impl From<HostError> for RenderError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

impl RenderError {
    /// Borrow the host error, if this is the pass-through variant
    #[must_use]
    pub fn host_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Host(err) => Some(err.as_ref()),
            Self::MissingHost => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("template exploded")]
    struct Exploded;

    #[test]
    fn missing_host_has_no_host_error() {
        assert!(RenderError::MissingHost.host_error().is_none());
    }

    #[test]
    fn host_variant_exposes_the_original_error() {
        let err = RenderError::from(Box::new(Exploded) as HostError);
        let inner = err.host_error().expect("host error");
        assert!(inner.downcast_ref::<Exploded>().is_some());
        assert_eq!(err.to_string(), "template exploded");
    }
}
