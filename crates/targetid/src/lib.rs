//! Stable, credential-safe identifiers for scan targets.
//!
//! Two tool invocations — different machines, days apart — must agree on
//! what "the same logical target" is so findings can be correlated and
//! deduplicated. [`get_target_id`] derives that identifier from current
//! on-disk state:
//!
//! - inside a usable git checkout:
//!   `pkg:git/<host>/<org>/<project>@<commit>?branch=<branch>`
//! - anywhere else: `pkg:filesystem/<sha256-of-canonical-path>/001`
//!
//! with an optional percent-encoded `#<sub-path>` fragment appended.
//!
//! The only fatal error is a root path that cannot be resolved
//! ([`PathError`]). Every repository irregularity — no repo, broken or
//! detached HEAD, stripped or credentialed remotes — silently selects the
//! filesystem scheme instead. The call is synchronous, holds no state, and
//! is safe to issue from multiple threads.

#![forbid(unsafe_code)]

use camino::Utf8Path;

pub use targetid_repo::PathError;
pub use targetid_types::{RepoIdentity, TargetId, ids};

/// Derive the stable identifier for `root`, optionally pointing at
/// `sub_path` within it.
///
/// `root` must exist on disk; `sub_path` is an opaque fragment modifier and
/// is never checked against the filesystem.
///
/// # Errors
///
/// [`PathError`] if `root` does not exist or cannot be canonicalized.
pub fn get_target_id(root: &Utf8Path, sub_path: Option<&str>) -> Result<TargetId, PathError> {
    let canonical = targetid_repo::canonicalize(root)?;
    let identity = targetid_repo::inspect(&canonical);
    Ok(targetid_domain::assemble(
        identity.as_ref(),
        canonical.as_str(),
        sub_path,
    ))
}
