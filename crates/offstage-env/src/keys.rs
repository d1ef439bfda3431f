//! Well-known environment key names
//!
//! Symbolic keys are stored upper-cased; structural keys carry a dotted
//! framework namespace and are never case-folded.

/// Canonical protocol field holding the request method.
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";

/// Convenience alias rewritten into [`REQUEST_METHOD`] during merge.
pub const METHOD: &str = "METHOD";

/// Secure-transport flag; coerced to the literal `"on"`/`"off"` strings
/// downstream consumers expect.
pub const HTTPS: &str = "HTTPS";

/// Nominal host name of the synthetic request.
pub const HTTP_HOST: &str = "HTTP_HOST";

/// Path prefix under which the synthetic request is mounted.
pub const SCRIPT_NAME: &str = "SCRIPT_NAME";

/// Input-stream placeholder (structural key, left lower-case).
pub const INPUT: &str = "offstage.input";

/// Routing-table reference attached by the renderer (structural key).
pub const ROUTES: &str = "offstage.routes";
