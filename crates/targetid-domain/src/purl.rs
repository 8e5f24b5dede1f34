use crate::{fingerprint, fragment};
use targetid_types::{RepoIdentity, TargetId, ids};

/// Assemble the final purl-style id from whatever identity is available.
///
/// Exactly one of the two schemes is chosen: a well-formed repository
/// identity wins, anything else (including a malformed one) falls back to
/// the fingerprint of the canonical path. The branch passes through the
/// fragment escape set so unusual branch names can never smuggle an
/// unescaped `#` into the id.
pub fn assemble(
    identity: Option<&RepoIdentity>,
    canonical_path: &str,
    sub_path: Option<&str>,
) -> TargetId {
    let mut id = match identity {
        Some(repo) if repo.is_well_formed() => format!(
            "{}:{}/{}/{}@{}?branch={}",
            ids::PURL_PREFIX,
            ids::SCHEME_GIT,
            repo.host,
            repo.path,
            repo.commit,
            fragment::encode(&repo.branch),
        ),
        _ => format!(
            "{}:{}/{}/{}",
            ids::PURL_PREFIX,
            ids::SCHEME_FILESYSTEM,
            fingerprint::path_digest(canonical_path),
            ids::FILESYSTEM_ORDINAL,
        ),
    };

    if let Some(sub) = sub_path
        && !sub.is_empty()
    {
        id.push('#');
        id.push_str(&fragment::encode(sub));
    }

    TargetId::new(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT: &str = "0123456789abcdef0123456789abcdef01234567";

    fn identity() -> RepoIdentity {
        RepoIdentity {
            host: "github.com".to_string(),
            path: "org/repo".to_string(),
            commit: COMMIT.to_string(),
            branch: "master".to_string(),
        }
    }

    #[test]
    fn git_scheme_shape() {
        let id = assemble(Some(&identity()), "/ignored", None);
        assert_eq!(
            id.as_str(),
            format!("pkg:git/github.com/org/repo@{COMMIT}?branch=master")
        );
    }

    #[test]
    fn git_scheme_with_fragment() {
        let id = assemble(Some(&identity()), "/ignored", Some("package.json"));
        assert_eq!(
            id.as_str(),
            format!("pkg:git/github.com/org/repo@{COMMIT}?branch=master#package.json")
        );
    }

    #[test]
    fn filesystem_scheme_shape() {
        let id = assemble(None, "/some/dir", None);
        let expected = format!(
            "pkg:filesystem/{}/001",
            fingerprint::path_digest("/some/dir")
        );
        assert_eq!(id.as_str(), expected);
    }

    #[test]
    fn malformed_identity_falls_back_to_filesystem() {
        let mut broken = identity();
        broken.commit = "deadbeef".to_string();
        let id = assemble(Some(&broken), "/some/dir", None);
        assert!(id.as_str().starts_with("pkg:filesystem/"));
    }

    #[test]
    fn empty_sub_path_appends_no_fragment() {
        let id = assemble(None, "/some/dir", Some(""));
        assert!(!id.as_str().contains('#'));
    }

    #[test]
    fn fragment_is_encoded() {
        let id = assemble(None, "/some/dir", Some("a>b<.ts"));
        assert!(id.as_str().ends_with("#a%3Eb%3C.ts"));
    }

    #[test]
    fn branch_with_hash_is_escaped() {
        let mut odd = identity();
        odd.branch = "fix#42".to_string();
        let id = assemble(Some(&odd), "/ignored", Some("file.ts"));
        assert!(id.as_str().contains("?branch=fix%2342#file.ts"));
        assert_eq!(id.as_str().matches('#').count(), 1);
    }
}
