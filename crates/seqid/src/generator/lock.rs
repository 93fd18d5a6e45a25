#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    error::{Error, Result},
    generator::{Mutex, SequenceGenerator},
    id::SequenceId,
};

/// A lock-based sequence generator suitable for multi-threaded environments.
///
/// The counter is wrapped in a [`Mutex`], and the read and checked increment
/// happen inside one critical section. The lock is held only for that
/// increment and is never re-entered.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Fair access across threads
/// - ✅ Works on targets without native 64-bit atomics
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Fair access across threads is important
///
/// ## See Also
/// - [`AtomicSequenceGenerator`]
///
/// [`AtomicSequenceGenerator`]: crate::AtomicSequenceGenerator
#[derive(Debug)]
pub struct LockSequenceGenerator {
    #[cfg(feature = "cache-padded")]
    pub(crate) state: crossbeam_utils::CachePadded<Mutex<u64>>,
    #[cfg(not(feature = "cache-padded"))]
    pub(crate) state: Mutex<u64>,
}

impl LockSequenceGenerator {
    /// Creates a new [`LockSequenceGenerator`] whose first issued value is
    /// `1`.
    ///
    /// # Example
    /// ```
    /// use seqid::LockSequenceGenerator;
    ///
    /// let generator = LockSequenceGenerator::new();
    /// assert_eq!(generator.try_next_id().unwrap().get(), 1);
    /// ```
    pub const fn new() -> Self {
        Self::from_counter(0)
    }

    /// Creates a new generator that has already issued `counter`.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`].
    pub const fn from_counter(counter: u64) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(Mutex::new(counter)),
            #[cfg(not(feature = "cache-padded"))]
            state: Mutex::new(counter),
        }
    }

    /// Increments the counter and returns the new value.
    ///
    /// # Errors
    /// - Returns [`Error::Exhausted`] once the counter has reached
    ///   [`u64::MAX`].
    /// - Returns [`Error::LockPoisoned`] if another thread panicked while
    ///   holding the lock (not possible with `parking-lot`).
    ///
    /// # Example
    /// ```
    /// use seqid::LockSequenceGenerator;
    ///
    /// let generator = LockSequenceGenerator::from_counter(41);
    /// assert_eq!(generator.try_next_id().unwrap().get(), 42);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_id(&self) -> Result<SequenceId> {
        let mut counter = {
            #[cfg(feature = "parking-lot")]
            {
                self.state.lock()
            }
            #[cfg(not(feature = "parking-lot"))]
            {
                self.state.lock()?
            }
        };

        match counter.checked_add(1) {
            Some(next) => {
                *counter = next;
                Ok(SequenceId::new(next))
            }
            None => Err(Self::cold_exhausted(*counter)),
        }
    }

    /// Returns the last issued value.
    ///
    /// # Errors
    /// - Returns [`Error::LockPoisoned`] if the lock was poisoned.
    pub fn current(&self) -> Result<SequenceId> {
        #[cfg(feature = "parking-lot")]
        let counter = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let counter = self.state.lock()?;
        Ok(SequenceId::new(*counter))
    }

    #[cold]
    #[inline(never)]
    fn cold_exhausted(last: u64) -> Error {
        #[cfg(feature = "tracing")]
        tracing::error!(last, "locked sequence exhausted");
        Error::Exhausted { last }
    }
}

impl Default for LockSequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for LockSequenceGenerator {
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
        self.current()
    }
}
