//! Host descriptor and instance capabilities
//!
//! A descriptor is the controller-type binding of the host framework: it
//! supplies environment defaults, routing metadata, and a factory for
//! request-bound instances. The renderer calls nothing else on the host.

use crate::options::RenderOptions;
use offstage_env::{Environment, Handle};
use std::fmt::Debug;

/// Opaque error raised by host build/render entry points
///
/// The renderer forwards these unchanged; it performs no interpretation,
/// wrapping, or recovery.
pub type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Baseline environment attributes shared by every host type
///
/// Nominal host name, secure transport off, `GET` method, empty path
/// prefix, and an empty input-stream placeholder. Alias keys (`METHOD`,
/// `HTTPS`) are left in their convenience form; the merge pipeline
/// finalizes them.
#[must_use]
pub fn baseline_defaults() -> Environment {
    let mut env = Environment::new();
    env.insert("http_host", "example.org");
    env.insert("https", false);
    env.insert("method", "get");
    env.insert("script_name", "");
    env.insert(offstage_env::keys::INPUT, "");
    env
}

/// The controller-type binding supplied by the host framework
///
/// One descriptor stands for one host type. All renderer facades built for
/// it share the defaults it reports at facade construction time.
pub trait HostDescriptor: Send + Sync + Debug {
    /// Baseline environment for this host type
    ///
    /// Computed fresh on each call; the renderer merges it once per facade
    /// construction and never mutates the result in place.
    fn defaults(&self) -> Environment {
        baseline_defaults()
    }

    /// Opaque routing-table reference to attach to the environment
    fn routes(&self) -> Handle;

    /// Build a new instance bound to a synthetic request built from `env`
    ///
    /// # Errors
    /// Whatever the host's construction/binding machinery raises, opaque
    /// to the renderer.
    fn build_instance(&self, env: Environment) -> Result<Box<dyn HostInstance>, HostError>;
}

/// A freshly built, request-bound controller-like instance
pub trait HostInstance {
    /// Resolve and render a template to a string using the bound request
    /// context and the given options
    ///
    /// # Errors
    /// Framework-specific rendering errors (missing template, invalid
    /// locals, unsupported format), opaque to the renderer.
    fn render_to_string(&mut self, options: RenderOptions) -> Result<String, HostError>;
}
