//! Filesystem and git adapters for target identification.
//!
//! Three small pieces:
//! - `canonical`: resolve the caller's path (sole source of fatal errors)
//! - `discover`: explicit upward walk to an enclosing `.git`
//! - `inspect`: read HEAD/branch/remote, degrading to `None` on anything odd

#![forbid(unsafe_code)]

pub mod canonical;
pub mod discover;
pub mod inspect;

pub use canonical::{PathError, canonicalize};
pub use inspect::inspect;
