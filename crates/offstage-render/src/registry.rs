//! Process-wide renderer registry
//!
//! Memoizes exactly one [`Renderer`] per distinct host descriptor. The
//! cache key is the descriptor's object identity (the data pointer of its
//! shared allocation); the cached facade keeps the descriptor alive, so a
//! key is never recycled while its entry exists.

use crate::renderer::Renderer;
use dashmap::DashMap;
use offstage_env::Environment;
use offstage_host::HostDescriptor;
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL: Lazy<RendererRegistry> = Lazy::new(RendererRegistry::new);

/// Identity key for a shared host descriptor
type HostKey = usize;

/// Registry mapping host-descriptor identity to its cached facade
///
/// Thread-safe create-if-absent: concurrent [`obtain`](Self::obtain) calls
/// for the same descriptor construct the facade at most once (the shard
/// lock held by the entry API serializes the insert).
#[derive(Debug, Default)]
pub struct RendererRegistry {
    renderers: DashMap<HostKey, Arc<Renderer>>,
}

impl RendererRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            renderers: DashMap::new(),
        }
    }

    /// The process-wide registry, initialized on first use
    #[must_use]
    pub fn global() -> &'static RendererRegistry {
        &GLOBAL
    }

    fn key(host: &Arc<dyn HostDescriptor>) -> HostKey {
        Arc::as_ptr(host).cast::<()>() as HostKey
    }

    /// Cached facade for `host`, created on first call
    ///
    /// The facade is built with no environment overrides; callers needing
    /// a custom environment construct their own [`Renderer`] explicitly.
    #[must_use]
    pub fn obtain(&self, host: &Arc<dyn HostDescriptor>) -> Arc<Renderer> {
        self.renderers
            .entry(Self::key(host))
            .or_insert_with(|| {
                tracing::debug!(host = ?host, "caching renderer for host");
                Arc::new(Renderer::new(Arc::clone(host), Environment::new()))
            })
            .clone()
    }

    /// Number of cached facades
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Check whether no facade has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offstage_test_utils::echo_host;

    #[test]
    fn obtain_memoizes_per_descriptor() {
        let registry = RendererRegistry::new();
        let host: Arc<dyn HostDescriptor> = echo_host();
        let first = registry.obtain(&host);
        let second = registry.obtain(&host);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn distinct_descriptors_get_distinct_facades() {
        let registry = RendererRegistry::new();
        let a: Arc<dyn HostDescriptor> = echo_host();
        let b: Arc<dyn HostDescriptor> = echo_host();
        let fa = registry.obtain(&a);
        let fb = registry.obtain(&b);
        assert!(!Arc::ptr_eq(&fa, &fb));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn global_registry_is_a_singleton() {
        assert!(std::ptr::eq(
            RendererRegistry::global(),
            RendererRegistry::global()
        ));
    }
}
