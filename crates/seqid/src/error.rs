/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `seqid` can emit.
///
/// Duplicate identifiers and lost increments are not represented here: both
/// generator back-ends make them impossible rather than detectable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The counter has reached [`u64::MAX`] and cannot issue another value.
    ///
    /// This is permanent for the generator that returned it. Retrying cannot
    /// succeed, and the counter is left at `last`.
    #[error("sequence exhausted after issuing {last}")]
    Exhausted {
        /// The last value the generator issued.
        last: u64,
    },

    /// The operation failed because the lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(all(feature = "lock", not(feature = "parking-lot")))))]
    #[cfg(all(feature = "lock", not(feature = "parking-lot")))]
    #[error("sequence lock poisoned")]
    LockPoisoned,

    /// The process-wide issuer was already created, either lazily by
    /// [`crate::global`] or by an earlier [`crate::init_global`].
    #[error("global issuer is already initialized")]
    AlreadyInitialized,

    /// A registry key outside `0..capacity`.
    #[error("key {key} is out of range for a registry of {capacity} slots")]
    KeyOutOfRange {
        /// The rejected key.
        key: usize,
        /// Number of slots in the registry.
        capacity: usize,
    },
}

#[cfg_attr(docsrs, doc(cfg(all(feature = "lock", not(feature = "parking-lot")))))]
#[cfg(all(feature = "lock", not(feature = "parking-lot")))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg_attr(docsrs, doc(cfg(all(feature = "lock", not(feature = "parking-lot")))))]
#[cfg(all(feature = "lock", not(feature = "parking-lot")))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
