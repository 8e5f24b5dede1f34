//! Purl scheme names and literals.
//!
//! These strings are part of the emitted identifier format and must never
//! change without a coordinated migration of stored scan results.

/// Leading purl type prefix (`pkg:`).
pub const PURL_PREFIX: &str = "pkg";

// Schemes
pub const SCHEME_GIT: &str = "git";
pub const SCHEME_FILESYSTEM: &str = "filesystem";

/// Reserved disambiguation slot for the filesystem scheme.
///
/// Currently always this literal; the slot exists so multiple targets
/// sharing one path can be told apart in a later format revision.
pub const FILESYSTEM_ORDINAL: &str = "001";

/// Length of a full git commit id in hex characters.
pub const COMMIT_HEX_LEN: usize = 40;
