use core::fmt;

/// A value issued by a [`crate::SequenceGenerator`].
///
/// This is the post-increment counter value, so the first value any generator
/// issues is `1`. Values from one generator are unique and strictly
/// increasing in issue order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SequenceId(u64);

impl SequenceId {
    /// The counter value before anything has been issued.
    pub const ZERO: Self = Self(0);

    /// The largest value a generator can issue.
    pub const MAX: Self = Self(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<SequenceId> for u64 {
    fn from(id: SequenceId) -> Self {
        id.0
    }
}

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
