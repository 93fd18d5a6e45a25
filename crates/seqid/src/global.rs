//! The process-wide identifier issuer.
//!
//! Exactly one [`IdentifierIssuer`] backs these functions for the lifetime of
//! the process. It is created either lazily, with [`IdFormat::default`], the
//! first time [`global`] or [`next`] runs, or eagerly through [`init_global`]
//! with a configured format. Creation is guarded by a [`OnceLock`], so
//! concurrent first calls can never build two counters.
//!
//! # Example
//! ```
//! let a = seqid::next().unwrap();
//! let b = seqid::global().next().unwrap();
//! assert_ne!(a, b);
//! assert!(core::ptr::eq(seqid::global(), seqid::global()));
//! ```

use std::sync::OnceLock;

use crate::{Error, IdFormat, Identifier, IdentifierIssuer, Result};

static GLOBAL_ISSUER: OnceLock<IdentifierIssuer> = OnceLock::new();

/// Returns the process-wide issuer, creating it with the default format on
/// first use.
pub fn global() -> &'static IdentifierIssuer {
    GLOBAL_ISSUER.get_or_init(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!("initializing global issuer with default format");
        IdentifierIssuer::new()
    })
}

/// Creates the process-wide issuer with `format`.
///
/// Call this once at startup, before anything issues an identifier.
///
/// # Errors
/// - Returns [`Error::AlreadyInitialized`] if the issuer already exists,
///   whether from an earlier `init_global` or a lazy [`global`] call. The
///   existing issuer is left untouched.
pub fn init_global(format: IdFormat) -> Result<&'static IdentifierIssuer> {
    let mut pending = Some(format);
    let issuer = GLOBAL_ISSUER.get_or_init(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!(?pending, "initializing global issuer");
        IdentifierIssuer::with_format(pending.take().unwrap_or_default())
    });

    // `pending` is only consumed by the closure that won initialization.
    if pending.is_some() {
        #[cfg(feature = "tracing")]
        tracing::warn!("global issuer was already initialized");
        return Err(Error::AlreadyInitialized);
    }
    Ok(issuer)
}

/// Issues the next identifier from the process-wide issuer.
///
/// # Errors
/// - Returns [`Error::Exhausted`] once the global counter reaches
///   [`u64::MAX`].
pub fn next() -> Result<Identifier> {
    global().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use std::thread::scope;

    #[test]
    fn global_is_a_single_instance() {
        let first = global();
        let from_thread = std::thread::spawn(|| global() as *const IdentifierIssuer as usize)
            .join()
            .unwrap();
        assert!(core::ptr::eq(first, global()));
        assert_eq!(first as *const IdentifierIssuer as usize, from_thread);
    }

    #[test]
    fn init_after_lazy_creation_is_rejected() {
        let _ = global();
        assert_eq!(
            init_global(IdFormat::new("LATE")).unwrap_err(),
            Error::AlreadyInitialized
        );
        assert_eq!(global().format().prefix, IdFormat::DEFAULT_PREFIX);
    }

    #[test]
    fn handles_driven_concurrently_never_repeat() {
        const THREADS: usize = 8;
        const IDS_PER_THREAD: usize = 1_000;

        let seen = Arc::new(Mutex::new(HashSet::with_capacity(THREADS * IDS_PER_THREAD)));

        scope(|s| {
            for i in 0..THREADS {
                let seen = Arc::clone(&seen);
                s.spawn(move || {
                    // Half the threads go through a fresh accessor each call,
                    // the other half through the free function.
                    for _ in 0..IDS_PER_THREAD {
                        let id = if i % 2 == 0 {
                            global().next().unwrap()
                        } else {
                            next().unwrap()
                        };
                        assert!(seen.lock().unwrap().insert(id));
                    }
                });
            }
        });

        assert_eq!(seen.lock().unwrap().len(), THREADS * IDS_PER_THREAD);
    }
}
