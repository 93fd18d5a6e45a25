use crate::{Result, SequenceId};

/// A minimal interface for a shared, monotonically increasing counter.
///
/// Implementations must make "read, increment, return" a single indivisible
/// step: no two calls on the same generator may ever observe the same value.
pub trait SequenceGenerator: Send + Sync {
    /// Creates a new generator whose first issued value is `1`.
    fn new() -> Self;

    /// Creates a new, independent generator that has already issued
    /// `counter`.
    fn from_counter(counter: u64) -> Self;

    /// Increments the counter and returns the new value.
    ///
    /// # Errors
    /// - [`crate::Error::Exhausted`] once the counter has reached
    ///   [`u64::MAX`].
    /// - [`crate::Error::LockPoisoned`] for lock-based generators whose mutex
    ///   was poisoned.
    fn try_next_id(&self) -> Result<SequenceId>;

    /// Returns the last issued value, or [`SequenceId::ZERO`] if nothing has
    /// been issued yet.
    fn current(&self) -> Result<SequenceId>;
}
