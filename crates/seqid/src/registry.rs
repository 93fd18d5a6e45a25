use std::sync::OnceLock;

use crate::{Error, Result};

/// A fixed set of lazily constructed, per-key singletons.
///
/// Each of the `N` slots holds at most one instance for the lifetime of the
/// registry. The first access to a key constructs its instance; every later
/// access, from any thread, returns that same instance. Keys outside
/// `0..N` are rejected with [`Error::KeyOutOfRange`].
///
/// # Example
/// ```
/// use seqid::{Error, IdentifierIssuer, InstanceRegistry};
///
/// static TWINS: InstanceRegistry<IdentifierIssuer, 2> = InstanceRegistry::new();
///
/// let first = TWINS.get_or_init(0, IdentifierIssuer::new).unwrap();
/// let second = TWINS.get_or_init(1, IdentifierIssuer::new).unwrap();
/// assert!(!core::ptr::eq(first, second));
/// assert!(core::ptr::eq(first, TWINS.get_or_init(0, IdentifierIssuer::new).unwrap()));
/// assert_eq!(
///     TWINS.get_or_init(2, IdentifierIssuer::new).unwrap_err(),
///     Error::KeyOutOfRange { key: 2, capacity: 2 }
/// );
/// ```
#[derive(Debug)]
pub struct InstanceRegistry<T, const N: usize> {
    slots: [OnceLock<T>; N],
}

impl<T, const N: usize> InstanceRegistry<T, N> {
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; N],
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the instance for `key`, constructing it with `init` if this is
    /// the first access.
    ///
    /// If several threads race on the first access, exactly one `init` runs
    /// and all of them receive its result.
    ///
    /// # Errors
    /// - Returns [`Error::KeyOutOfRange`] if `key >= N`.
    pub fn get_or_init<F>(&self, key: usize, init: F) -> Result<&T>
    where
        F: FnOnce() -> T,
    {
        let slot = self.slot(key)?;
        Ok(slot.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(key, capacity = N, "initializing registry slot");
            init()
        }))
    }

    /// Returns the instance for `key` if it has been constructed.
    ///
    /// # Errors
    /// - Returns [`Error::KeyOutOfRange`] if `key >= N`.
    pub fn get(&self, key: usize) -> Result<Option<&T>> {
        Ok(self.slot(key)?.get())
    }

    fn slot(&self, key: usize) -> Result<&OnceLock<T>> {
        self.slots.get(key).ok_or(Error::KeyOutOfRange { key, capacity: N })
    }
}

impl<T, const N: usize> Default for InstanceRegistry<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
