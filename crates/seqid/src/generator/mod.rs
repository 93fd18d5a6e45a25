mod atomic;
mod interface;
#[cfg(feature = "lock")]
mod lock;
#[cfg(feature = "lock")]
mod mutex;

pub use atomic::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "lock")))]
#[cfg(feature = "lock")]
pub use lock::*;
#[cfg_attr(docsrs, doc(cfg(feature = "lock")))]
#[cfg(feature = "lock")]
pub use mutex::*;
