//! The renderer facade
//!
//! One facade per host binding. Its environment is finalized once at
//! construction (defaults merged with overrides, routing handle attached)
//! and never mutated afterwards, so concurrent renders on the same facade
//! need no locking.

use crate::error::RenderError;
use crate::registry::RendererRegistry;
use offstage_env::{keys, Environment};
use offstage_host::{HostDescriptor, RenderOptions};
use std::sync::Arc;

/// Renders host templates outside a live request
///
/// Each [`render`](Renderer::render) call builds a fresh synthetic request
/// environment clone, asks the host to construct a bound instance, and
/// delegates string rendering to it. The facade itself holds no per-call
/// state.
#[derive(Debug)]
pub struct Renderer {
    host: Option<Arc<dyn HostDescriptor>>,
    env: Environment,
}

impl Renderer {
    /// Build a facade for `host` with a custom environment
    ///
    /// `overrides` are merged over `host.defaults()` through the alias
    /// pipeline, then the host's routing handle is attached under
    /// [`keys::ROUTES`]. Use this to simulate, say, a `POST` under HTTPS
    /// from a specific host name.
    #[must_use]
    pub fn new(host: Arc<dyn HostDescriptor>, overrides: Environment) -> Self {
        let mut env = Environment::merged(&host.defaults(), &overrides);
        env.insert(keys::ROUTES, host.routes());
        Self {
            host: Some(host),
            env,
        }
    }

    /// Build a facade with no host binding
    ///
    /// Overrides still run through the merge pipeline, but every
    /// [`render`](Renderer::render) call fails with
    /// [`RenderError::MissingHost`].
    #[must_use]
    pub fn unbound(overrides: Environment) -> Self {
        Self {
            host: None,
            env: Environment::merged(&Environment::new(), &overrides),
        }
    }

    /// Cached facade for `host` from the process-wide registry
    ///
    /// Created at most once per distinct host descriptor; repeat calls
    /// return the same shared facade.
    #[must_use]
    pub fn for_host(host: &Arc<dyn HostDescriptor>) -> Arc<Renderer> {
        RendererRegistry::global().obtain(host)
    }

    /// The finalized environment renders run in
    #[inline]
    #[must_use]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// The bound host descriptor, if any
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&Arc<dyn HostDescriptor>> {
        self.host.as_ref()
    }

    /// Render a template to a string in the synthetic environment
    ///
    /// Options are forwarded to the host instance untouched; this layer
    /// interprets none of them.
    ///
    /// # Errors
    /// [`RenderError::MissingHost`] when no host is bound (checked before
    /// any request or instance construction), otherwise whatever the
    /// host's build/render entry points raise, passed through opaque.
    pub fn render(&self, options: RenderOptions) -> Result<String, RenderError> {
        let host = self.host.as_ref().ok_or(RenderError::MissingHost)?;
        tracing::debug!(template = ?options.template, "rendering out of band");
        let mut instance = host.build_instance(self.env.clone())?;
        let rendered = instance.render_to_string(options)?;
        tracing::trace!(bytes = rendered.len(), "render produced output");
        Ok(rendered)
    }
}

/// Host-side conveniences forwarding to the cached facade
///
/// The blanket implementation covers any shared host descriptor, giving
/// callers `host.render(options)` without naming the registry.
pub trait HostRenderExt {
    /// Cached facade for this host (see [`Renderer::for_host`])
    fn renderer(&self) -> Arc<Renderer>;

    /// Render through the cached facade
    ///
    /// # Errors
    /// Same as [`Renderer::render`].
    fn render(&self, options: RenderOptions) -> Result<String, RenderError> {
        self.renderer().render(options)
    }
}

impl<H: HostDescriptor + 'static> HostRenderExt for Arc<H> {
    fn renderer(&self) -> Arc<Renderer> {
        let host: Arc<dyn HostDescriptor> = self.clone();
        Renderer::for_host(&host)
    }
}
