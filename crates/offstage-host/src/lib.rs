//! Host-framework capability interface
//!
//! The renderer owns nothing of the host framework. Everything it needs is
//! expressed as a narrow set of capabilities the host supplies:
//!
//! - [`HostDescriptor`]: the controller-type binding — baseline environment
//!   defaults, an opaque routing-table reference, and an instance factory
//! - [`HostInstance`]: a freshly built controller-like instance that can
//!   render a string from [`RenderOptions`]
//! - [`SyntheticRequest`]: the fake request a host binds its instance to
//!   when no live request exists
//!
//! Rendering failures cross this boundary as an opaque [`HostError`]; the
//! renderer neither interprets nor wraps them.

mod descriptor;
mod options;
mod request;

pub use descriptor::{baseline_defaults, HostDescriptor, HostError, HostInstance};
pub use options::{Layout, RenderOptions};
pub use request::SyntheticRequest;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
