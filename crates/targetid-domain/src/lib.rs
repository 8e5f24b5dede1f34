//! Pure target-identity derivation (no IO).
//!
//! Input: strings produced elsewhere (a canonical path, a raw remote URL,
//! an optional sub-path). Output: sanitized remote identities and the final
//! purl-style id. Everything here is deterministic and side-effect free.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod fragment;
pub mod purl;
pub mod remote;

#[cfg(test)]
mod proptests;

pub use purl::assemble;
pub use remote::RemoteIdentity;
