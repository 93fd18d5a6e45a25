//! Formatted identifier issuing on top of a [`SequenceGenerator`].

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{AtomicSequenceGenerator, IdFormat, Identifier, Result, SequenceGenerator, SequenceId};

/// Issues formatted, process-unique identifiers from one shared counter.
///
/// An issuer pairs a [`SequenceGenerator`] with an [`IdFormat`]. Every call to
/// [`Self::next`] advances the counter exactly once and renders the new value,
/// so `N` calls from any number of threads produce `N` distinct identifiers.
///
/// Share one issuer by reference (or through [`crate::global`]) with every
/// component that needs identifiers; two issuers never coordinate with each
/// other.
///
/// # Example
/// ```
/// use seqid::IdentifierIssuer;
///
/// let issuer = IdentifierIssuer::new();
/// assert_eq!(issuer.next().unwrap(), "0000-1");
/// assert_eq!(issuer.next().unwrap(), "0000-2");
/// ```
#[derive(Debug)]
pub struct IdentifierIssuer<G = AtomicSequenceGenerator>
where
    G: SequenceGenerator,
{
    generator: G,
    format: IdFormat,
}

impl IdentifierIssuer {
    /// Creates an issuer backed by an [`AtomicSequenceGenerator`] with the
    /// default format.
    pub fn new() -> Self {
        Self::with_format(IdFormat::default())
    }
}

impl Default for IdentifierIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> IdentifierIssuer<G>
where
    G: SequenceGenerator,
{
    /// Creates an issuer with a fresh generator and the given format.
    pub fn with_format(format: IdFormat) -> Self {
        Self::from_parts(G::new(), format)
    }

    /// Creates an issuer around an existing generator.
    pub const fn from_parts(generator: G, format: IdFormat) -> Self {
        Self { generator, format }
    }

    /// Issues the next identifier.
    ///
    /// # Errors
    /// - Returns [`crate::Error::Exhausted`] once the counter has reached
    ///   [`u64::MAX`].
    /// - Returns [`crate::Error::LockPoisoned`] if a lock-based generator's
    ///   mutex was poisoned.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next(&self) -> Result<Identifier> {
        let id = self.generator.try_next_id()?;
        Ok(self.format.render(id))
    }

    /// Issues the next raw value without formatting it.
    ///
    /// This draws from the same counter as [`Self::next`].
    ///
    /// # Errors
    /// See [`Self::next`].
    pub fn next_sequence(&self) -> Result<SequenceId> {
        self.generator.try_next_id()
    }

    /// Returns the last issued value.
    ///
    /// # Errors
    /// - Returns [`crate::Error::LockPoisoned`] if a lock-based generator's
    ///   mutex was poisoned.
    pub fn current(&self) -> Result<SequenceId> {
        self.generator.current()
    }

    pub const fn format(&self) -> &IdFormat {
        &self.format
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }
}
