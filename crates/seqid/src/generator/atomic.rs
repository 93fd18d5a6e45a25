use portable_atomic::{AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    generator::SequenceGenerator,
    id::SequenceId,
};

/// A lock-free sequence generator suitable for multi-threaded environments.
///
/// The counter lives in an [`AtomicU64`] and is advanced with a single
/// compare-and-swap, so concurrent callers never observe the same value and
/// never block each other.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Lock-free
/// - ✅ Checked overflow: never wraps past [`u64::MAX`]
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Throughput matters more than fair access between threads
///
/// ## See Also
/// - [`LockSequenceGenerator`]
///
/// [`LockSequenceGenerator`]: crate::LockSequenceGenerator
#[derive(Debug)]
pub struct AtomicSequenceGenerator {
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<AtomicU64>,
    #[cfg(not(feature = "cache-padded"))]
    state: AtomicU64,
}

impl AtomicSequenceGenerator {
    /// Creates a new [`AtomicSequenceGenerator`] whose first issued value is
    /// `1`.
    ///
    /// # Example
    /// ```
    /// use seqid::AtomicSequenceGenerator;
    ///
    /// let generator = AtomicSequenceGenerator::new();
    /// assert_eq!(generator.try_next_id().unwrap().get(), 1);
    /// assert_eq!(generator.try_next_id().unwrap().get(), 2);
    /// ```
    pub const fn new() -> Self {
        Self::from_counter(0)
    }

    /// Creates a new generator that has already issued `counter`.
    ///
    /// This is the only way to choose a starting point. It builds a fresh,
    /// independent generator and cannot touch the state of an existing one.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`].
    pub const fn from_counter(counter: u64) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(AtomicU64::new(counter)),
            #[cfg(not(feature = "cache-padded"))]
            state: AtomicU64::new(counter),
        }
    }

    /// Increments the counter and returns the new value.
    ///
    /// # Errors
    /// - Returns [`Error::Exhausted`] once the counter has reached
    ///   [`u64::MAX`]. The counter stays at its maximum.
    ///
    /// # Example
    /// ```
    /// use seqid::{AtomicSequenceGenerator, Error};
    ///
    /// let generator = AtomicSequenceGenerator::from_counter(u64::MAX - 1);
    /// assert_eq!(generator.try_next_id().unwrap().get(), u64::MAX);
    /// assert_eq!(
    ///     generator.try_next_id(),
    ///     Err(Error::Exhausted { last: u64::MAX })
    /// );
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<SequenceId> {
        // Relaxed is enough: the counter is the only shared location and every
        // RMW on it is totally ordered.
        match self
            .state
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            }) {
            Ok(previous) => Ok(SequenceId::new(previous + 1)),
            Err(last) => Err(Self::cold_exhausted(last)),
        }
    }

    /// Returns the last issued value.
    pub fn current(&self) -> SequenceId {
        SequenceId::new(self.state.load(Ordering::Relaxed))
    }

    #[cold]
    #[inline(never)]
    fn cold_exhausted(last: u64) -> Error {
        #[cfg(feature = "tracing")]
        tracing::error!(last, "atomic sequence exhausted");
        Error::Exhausted { last }
    }
}

impl Default for AtomicSequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for AtomicSequenceGenerator {
    fn new() -> Self {
        Self::new()
    }

    fn from_counter(counter: u64) -> Self {
        Self::from_counter(counter)
    }

    fn try_next_id(&self) -> Result<SequenceId> {
        self.try_next_id()
    }

    fn current(&self) -> Result<SequenceId> {
        Ok(self.current())
    }
}
