//! Environment value union
//!
//! Provides [`EnvValue`] for the string/boolean attributes of a synthetic
//! request environment, plus [`Handle`] for the opaque framework metadata
//! (routing tables) that rides along in structural slots.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque shared reference to host-framework metadata
///
/// The environment never inspects what a handle points at; it only carries
/// it to the host. Identity is pointer identity of the shared allocation.
#[derive(Clone)]
pub struct Handle(Arc<dyn Any + Send + Sync>);

impl Handle {
    /// Wrap a value into an opaque handle
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Downcast back to the concrete type, if it matches
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Pointer-identity comparison with another handle
    #[inline]
    #[must_use]
    pub fn same_as(&self, other: &Handle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle")
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

/// A single environment attribute value
///
/// Mirrors the loose value shapes accepted at the caller boundary: plain
/// strings, convenience booleans (e.g. the secure-transport flag), and
/// opaque handles for structural framework slots.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    /// Textual attribute, stored verbatim
    Str(String),

    /// Boolean convenience flag
    Bool(bool),

    /// Opaque framework metadata (e.g. a routing-table reference)
    Handle(Handle),
}

impl EnvValue {
    /// Borrow the textual form, if this is a string value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the boolean form, if this is a flag value
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the handle, if this is an opaque metadata slot
    #[inline]
    #[must_use]
    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            Self::Handle(h) => Some(h),
            _ => None,
        }
    }

    /// Truthiness under the source convention: only `Bool(false)` is falsy
    #[inline]
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

impl From<&str> for EnvValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for EnvValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Handle> for EnvValue {
    fn from(h: Handle) -> Self {
        Self::Handle(h)
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Handle(h) => write!(f, "{h:?}"),
        }
    }
}
