//! Out-of-band renderer facade
//!
//! Invokes a host controller's template rendering outside any live HTTP
//! request by synthesizing a minimal fake request environment.
//!
//! # Core Concepts
//!
//! - [`Renderer`]: per-host facade; merges defaults and overrides into a
//!   finalized environment once, then delegates each render to a freshly
//!   built host instance
//! - [`RendererRegistry`]: process-wide cache creating exactly one facade
//!   per distinct host descriptor
//! - [`HostRenderExt`]: `host.render(options)` convenience over the cache
//! - [`RenderError`]: missing-binding failure plus opaque host pass-through
//!
//! # Example
//!
//! ```
//! use offstage_host::RenderOptions;
//! use offstage_render::HostRenderExt;
//! use offstage_test_utils::echo_host;
//!
//! let host = echo_host();
//! let greeting = host
//!     .render(RenderOptions::new().template("greeting").local("name", "Ada"))
//!     .unwrap();
//! assert_eq!(greeting, "Hello, Ada");
//! ```

mod error;
mod registry;
mod renderer;

pub use error::RenderError;
pub use registry::RendererRegistry;
pub use renderer::{HostRenderExt, Renderer};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
