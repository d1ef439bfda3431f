//! Testing utilities for the offstage workspace
//!
//! Shared stub hosts and instances standing in for the external host
//! framework.

#![allow(missing_docs)]

use offstage_host::{
    baseline_defaults, HostDescriptor, HostError, HostInstance, RenderOptions, SyntheticRequest,
};
use offstage_env::{Environment, Handle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stub routing table attached to synthetic environments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    pub name: String,
}

/// Rendering failure raised by [`EchoInstance`] for unknown templates.
#[derive(Debug, thiserror::Error)]
#[error("missing template: {0}")]
pub struct MissingTemplateError(pub String);

/// Host descriptor stub that counts `defaults()` calls and builds
/// [`EchoInstance`]s bound to a [`SyntheticRequest`].
#[derive(Debug)]
pub struct EchoHost {
    routes: Handle,
    defaults_calls: AtomicUsize,
}

impl EchoHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Handle::new(RouteTable {
                name: "echo".to_string(),
            }),
            defaults_calls: AtomicUsize::new(0),
        }
    }

    /// How many times the renderer asked for defaults.
    #[must_use]
    pub fn defaults_calls(&self) -> usize {
        self.defaults_calls.load(Ordering::SeqCst)
    }
}

impl Default for EchoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDescriptor for EchoHost {
    fn defaults(&self) -> Environment {
        self.defaults_calls.fetch_add(1, Ordering::SeqCst);
        baseline_defaults()
    }

    fn routes(&self) -> Handle {
        self.routes.clone()
    }

    fn build_instance(&self, env: Environment) -> Result<Box<dyn HostInstance>, HostError> {
        Ok(Box::new(EchoInstance {
            request: SyntheticRequest::from_env(env),
        }))
    }
}

/// Instance stub rendering canned templates from the bound request.
///
/// - `greeting`: `"Hello, {locals.name}"` (falls back to `world`)
/// - `request_line`: method, host and transport of the bound request
/// - anything else: [`MissingTemplateError`]
pub struct EchoInstance {
    request: SyntheticRequest,
}

impl HostInstance for EchoInstance {
    fn render_to_string(&mut self, options: RenderOptions) -> Result<String, HostError> {
        let template = options.template.as_deref().unwrap_or("");
        match template {
            "greeting" => {
                let name = options
                    .locals
                    .get("name")
                    .and_then(|v| v.as_str())
                    .unwrap_or("world");
                Ok(format!("Hello, {name}"))
            }
            "request_line" => Ok(format!(
                "{} {} secure={}",
                self.request.request_method(),
                self.request.http_host(),
                self.request.secure(),
            )),
            other => Err(Box::new(MissingTemplateError(other.to_string()))),
        }
    }
}

/// Host descriptor stub whose instance construction always fails.
#[derive(Debug)]
pub struct BrokenHost {
    routes: Handle,
}

#[derive(Debug, thiserror::Error)]
#[error("instance construction refused")]
pub struct ConstructionRefused;

impl BrokenHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: Handle::new(RouteTable {
                name: "broken".to_string(),
            }),
        }
    }
}

impl Default for BrokenHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDescriptor for BrokenHost {
    fn routes(&self) -> Handle {
        self.routes.clone()
    }

    fn build_instance(&self, _env: Environment) -> Result<Box<dyn HostInstance>, HostError> {
        Err(Box::new(ConstructionRefused))
    }
}

/// Fresh echo host behind a shared pointer, ready for the renderer registry.
#[must_use]
pub fn echo_host() -> Arc<EchoHost> {
    Arc::new(EchoHost::new())
}
