#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod global;
mod id;
mod issuer;
mod registry;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::global::*;
pub use crate::id::*;
pub use crate::issuer::*;
pub use crate::registry::*;
