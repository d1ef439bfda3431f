//! The environment mapping and its merge/alias pipeline
//!
//! Keys are normalized at every insertion and lookup boundary so the map
//! holds exactly one canonical spelling per attribute. The merge pipeline
//! is pure and never fails.

use crate::keys;
use crate::value::EnvValue;
use std::collections::HashMap;

/// Fold a caller-supplied key into its canonical form
///
/// Structural keys carry a dotted framework namespace (`offstage.input`)
/// and pass through verbatim; every other key is a symbolic protocol field
/// and is folded to ASCII upper-case.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    if key.contains('.') {
        key.to_string()
    } else {
        key.to_ascii_uppercase()
    }
}

/// Synthetic request environment
///
/// A string-keyed mapping of [`EnvValue`] attributes. Construction is
/// cheap; the finalized environment for a render is produced once by
/// [`Environment::merged`] and treated as immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    entries: HashMap<String, EnvValue>,
}

impl Environment {
    /// Create an empty environment
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of attributes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the environment holds no attributes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an attribute under its normalized key
    ///
    /// Returns the previous value for the same normalized key, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<EnvValue>,
    ) -> Option<EnvValue> {
        let key: String = key.into();
        self.entries.insert(normalize_key(&key), value.into())
    }

    /// Look up an attribute by key (normalized before lookup)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnvValue> {
        self.entries.get(&normalize_key(key))
    }

    /// Look up a string attribute
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(EnvValue::as_str)
    }

    /// Check for an attribute by key (normalized before lookup)
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    /// Remove an attribute, returning its value if present
    pub fn remove(&mut self, key: &str) -> Option<EnvValue> {
        self.entries.remove(&normalize_key(key))
    }

    /// Iterate over all attributes in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge `overrides` over `base` and finalize alias keys
    ///
    /// The pipeline, in order:
    /// 1. overlay: start from `base`, replace identically-keyed entries
    ///    with `overrides` (override wins; keys only in `overrides` are
    ///    added, keys only in `base` survive)
    /// 2. `METHOD` alias: removed and rewritten as `REQUEST_METHOD` with
    ///    the value upper-cased
    /// 3. `HTTPS` alias: coerced by truthiness to the literal `"on"` or
    ///    `"off"` string form
    ///
    /// Pure and infallible; no method-token or host-syntax validation is
    /// performed.
    #[must_use]
    pub fn merged(base: &Environment, overrides: &Environment) -> Environment {
        let mut env = base.clone();
        for (key, value) in &overrides.entries {
            env.entries.insert(key.clone(), value.clone());
        }
        env.finalize_method_key();
        env.finalize_https_key();
        env
    }

    /// Rewrite the `METHOD` convenience alias into `REQUEST_METHOD`
    fn finalize_method_key(&mut self) {
        if let Some(value) = self.entries.remove(keys::METHOD) {
            let value = match value {
                EnvValue::Str(method) => EnvValue::Str(method.to_ascii_uppercase()),
                other => other,
            };
            self.entries.insert(keys::REQUEST_METHOD.to_string(), value);
        }
    }

    /// Coerce the `HTTPS` flag into the `"on"`/`"off"` string convention
    fn finalize_https_key(&mut self) {
        if let Some(value) = self.entries.get(keys::HTTPS) {
            let literal = if value.is_truthy() { "on" } else { "off" };
            self.entries
                .insert(keys::HTTPS.to_string(), EnvValue::Str(literal.to_string()));
        }
    }
}

impl<K: Into<String>, V: Into<EnvValue>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (key, value) in iter {
            env.insert(key, value);
        }
        env
    }
}

impl<K: Into<String>, V: Into<EnvValue>> Extend<(K, V)> for Environment {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Handle;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbolic_keys_fold_to_upper_case() {
        assert_eq!(normalize_key("http_host"), "HTTP_HOST");
        assert_eq!(normalize_key("Request_Method"), "REQUEST_METHOD");
        assert_eq!(normalize_key("HTTPS"), "HTTPS");
    }

    #[test]
    fn structural_keys_pass_through() {
        assert_eq!(normalize_key("offstage.input"), "offstage.input");
        assert_eq!(normalize_key("offstage.routes"), "offstage.routes");
    }

    #[test]
    fn insert_and_get_share_one_canonical_spelling() {
        let mut env = Environment::new();
        env.insert("http_host", "example.org");
        assert_eq!(env.get_str("HTTP_HOST"), Some("example.org"));
        assert_eq!(env.get_str("http_host"), Some("example.org"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn merge_override_wins() {
        let base: Environment = [("http_host", "example.org")].into_iter().collect();
        let overrides: Environment = [("HTTP_HOST", "render.test")].into_iter().collect();
        let env = Environment::merged(&base, &overrides);
        assert_eq!(env.get_str(keys::HTTP_HOST), Some("render.test"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn merge_keeps_base_keys_and_adds_new_ones() {
        let base: Environment = [("script_name", "")].into_iter().collect();
        let overrides: Environment = [("path_info", "/articles")].into_iter().collect();
        let env = Environment::merged(&base, &overrides);
        assert_eq!(env.get_str(keys::SCRIPT_NAME), Some(""));
        assert_eq!(env.get_str("PATH_INFO"), Some("/articles"));
    }

    #[test]
    fn method_alias_is_rewritten_and_upcased() {
        let base = Environment::new();
        let overrides: Environment = [("method", "post")].into_iter().collect();
        let env = Environment::merged(&base, &overrides);
        assert_eq!(env.get_str(keys::REQUEST_METHOD), Some("POST"));
        assert!(!env.contains_key(keys::METHOD));
    }

    #[test]
    fn method_alias_in_defaults_is_also_rewritten() {
        let base: Environment = [("method", "get")].into_iter().collect();
        let env = Environment::merged(&base, &Environment::new());
        assert_eq!(env.get_str(keys::REQUEST_METHOD), Some("GET"));
        assert!(!env.contains_key(keys::METHOD));
    }

    #[test]
    fn https_true_coerces_to_on() {
        let overrides: Environment = [(keys::HTTPS, true)].into_iter().collect();
        let env = Environment::merged(&Environment::new(), &overrides);
        assert_eq!(env.get_str(keys::HTTPS), Some("on"));
    }

    #[test]
    fn https_false_coerces_to_off() {
        let overrides: Environment = [(keys::HTTPS, false)].into_iter().collect();
        let env = Environment::merged(&Environment::new(), &overrides);
        assert_eq!(env.get_str(keys::HTTPS), Some("off"));
    }

    #[test]
    fn absent_https_is_not_synthesized() {
        let env = Environment::merged(&Environment::new(), &Environment::new());
        assert!(!env.contains_key(keys::HTTPS));
    }

    #[test]
    fn merge_is_pure() {
        let base: Environment = [("method", "get")].into_iter().collect();
        let overrides: Environment = [("https", true)].into_iter().collect();
        let _ = Environment::merged(&base, &overrides);
        // inputs untouched by the pipeline
        assert!(base.contains_key(keys::METHOD));
        assert_eq!(overrides.get(keys::HTTPS), Some(&EnvValue::Bool(true)));
    }

    #[test]
    fn unrecognized_keys_are_stored_verbatim() {
        let overrides: Environment =
            [("server_name", "not-even-a-hostname !?")].into_iter().collect();
        let env = Environment::merged(&Environment::new(), &overrides);
        assert_eq!(env.get_str("SERVER_NAME"), Some("not-even-a-hostname !?"));
    }

    #[test]
    fn handles_survive_the_merge() {
        let routes = Handle::new(String::from("route table"));
        let mut base = Environment::new();
        base.insert(keys::ROUTES, routes.clone());
        let env = Environment::merged(&base, &Environment::new());
        let stored = env.get(keys::ROUTES).and_then(EnvValue::as_handle);
        assert!(stored.is_some_and(|h| h.same_as(&routes)));
    }
}
