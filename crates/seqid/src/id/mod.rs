mod format;
mod identifier;
mod sequence;

pub use format::*;
pub use identifier::*;
pub use sequence::*;
