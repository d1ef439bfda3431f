//! Typed render options
//!
//! The renderer forwards these to the host instance untouched; option
//! validation (template existence, format support, variant validity) is
//! entirely the host framework's concern.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Layout selection for a render
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Layout {
    /// Let the host pick its configured layout
    #[default]
    Default,

    /// Render without any layout
    Disabled,

    /// Render inside the named layout template
    Named(String),
}

/// Options forwarded verbatim to [`HostInstance::render_to_string`]
///
/// The recognized keys mirror what a host's in-request render call accepts:
/// template identifier, layout, locals, assigns, format, variant, status.
///
/// [`HostInstance::render_to_string`]: crate::HostInstance::render_to_string
///
/// # Example
///
/// ```
/// use offstage_host::RenderOptions;
///
/// let options = RenderOptions::new()
///     .template("articles/show")
///     .local("title", "Hello")
///     .format("html");
/// assert_eq!(options.template.as_deref(), Some("articles/show"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderOptions {
    /// Template identifier to resolve and render
    pub template: Option<String>,

    /// Layout selection
    pub layout: Layout,

    /// Template-local variables
    pub locals: HashMap<String, Value>,

    /// Instance-variable style assigns exposed to the view context
    pub assigns: HashMap<String, Value>,

    /// Requested output format (e.g. `html`, `json`)
    pub format: Option<String>,

    /// Template variant (e.g. `phone`)
    pub variant: Option<String>,

    /// Response status the host should record alongside the render
    pub status: Option<u16>,
}

impl RenderOptions {
    /// Create options with every key unset
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template identifier
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the layout selection
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Add a template-local variable
    #[must_use]
    pub fn local(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.locals.insert(name.into(), value.into());
        self
    }

    /// Add a view-context assign
    #[must_use]
    pub fn assign(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.assigns.insert(name.into(), value.into());
        self
    }

    /// Set the requested output format
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the template variant
    #[must_use]
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set the recorded response status
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}
