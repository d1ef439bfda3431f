//! Synthetic request environment for out-of-band rendering
//!
//! A host controller renders templates against a request context. When no
//! live request exists, one is faked from an [`Environment`]: a string-keyed
//! mapping merged from host defaults and caller overrides.
//!
//! # Core Concepts
//!
//! - [`EnvValue`]: value union stored in the environment (string, boolean,
//!   or an opaque [`Handle`] for framework metadata such as routing tables)
//! - [`Environment`]: the mapping itself, with canonical key normalization
//!   applied at every insertion and lookup boundary
//! - [`Environment::merged`]: the pure merge/alias pipeline that finalizes
//!   defaults + overrides into a render-ready environment
//! - [`keys`]: well-known environment key names
//!
//! # Example
//!
//! ```
//! use offstage_env::{keys, Environment};
//!
//! let base: Environment = [("http_host", "example.org"), ("method", "get")]
//!     .into_iter()
//!     .collect();
//! let overrides: Environment = [("method", "post")].into_iter().collect();
//!
//! let env = Environment::merged(&base, &overrides);
//!
//! assert_eq!(env.get_str(keys::REQUEST_METHOD), Some("POST"));
//! assert_eq!(env.get_str(keys::HTTP_HOST), Some("example.org"));
//! ```

mod env;
pub mod keys;
mod value;

pub use env::{normalize_key, Environment};
pub use value::{EnvValue, Handle};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
