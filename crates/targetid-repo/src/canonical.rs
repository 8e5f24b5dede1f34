use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// The only error the identification pipeline surfaces to callers: the
/// supplied root cannot be resolved at all. Everything downstream degrades
/// instead of failing.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("target path does not exist: {0}")]
    NotFound(Utf8PathBuf),
    #[error("cannot canonicalize target path {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve a caller-supplied path to its canonical absolute form.
///
/// `.`/`..` segments and symlinks are resolved by the platform
/// canonicalizer. The returned string form is the exact input to the
/// fallback fingerprint, so no further normalization is applied: no case
/// folding, and the canonicalizer never emits a trailing separator.
pub fn canonicalize(path: &Utf8Path) -> Result<Utf8PathBuf, PathError> {
    path.canonicalize_utf8().map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            PathError::NotFound(path.to_owned())
        } else {
            PathError::Io {
                path: path.to_owned(),
                source,
            }
        }
    })
}
