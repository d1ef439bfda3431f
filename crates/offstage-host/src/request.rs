//! Synthetic request built from a finalized environment
//!
//! Hosts bind this to a freshly built instance in place of a live request.
//! It is a read-only view; the environment it wraps was finalized by the
//! renderer's merge pipeline and is not mutated afterwards.

use offstage_env::{keys, Environment, Handle};

/// A fake request carrying a finalized [`Environment`]
#[derive(Debug, Clone)]
pub struct SyntheticRequest {
    env: Environment,
}

impl SyntheticRequest {
    /// Wrap a finalized environment
    #[inline]
    #[must_use]
    pub fn from_env(env: Environment) -> Self {
        Self { env }
    }

    /// The underlying environment
    #[inline]
    #[must_use]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Request method, e.g. `GET` (empty when the environment carries none)
    #[must_use]
    pub fn request_method(&self) -> &str {
        self.env.get_str(keys::REQUEST_METHOD).unwrap_or("")
    }

    /// Nominal host name of the request
    #[must_use]
    pub fn http_host(&self) -> &str {
        self.env.get_str(keys::HTTP_HOST).unwrap_or("")
    }

    /// Mount-point path prefix
    #[must_use]
    pub fn script_name(&self) -> &str {
        self.env.get_str(keys::SCRIPT_NAME).unwrap_or("")
    }

    /// Whether the request claims secure transport (`HTTPS == "on"`)
    #[must_use]
    pub fn secure(&self) -> bool {
        self.env.get_str(keys::HTTPS) == Some("on")
    }

    /// Routing-table reference attached by the renderer, if any
    #[must_use]
    pub fn routes(&self) -> Option<&Handle> {
        self.env.get(keys::ROUTES).and_then(|v| v.as_handle())
    }
}
