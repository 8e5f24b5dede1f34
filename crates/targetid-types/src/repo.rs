use crate::ids;

/// Identity of the repository enclosing a scan target.
///
/// Constructed fresh per identification call and never cached; a value is
/// usable for id assembly only when [`RepoIdentity::is_well_formed`] holds.
/// `host` and `path` come from the sanitized remote URL, so no credential
/// material can appear here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoIdentity {
    /// Remote host, lowercased (e.g. `github.com`).
    pub host: String,
    /// `org/project` path with `.` segments and the `.git` suffix stripped.
    pub path: String,
    /// Full commit id the working tree's HEAD resolves to.
    pub commit: String,
    /// Name of the checked-out branch.
    pub branch: String,
}

impl RepoIdentity {
    /// All fields non-empty and the commit a full-length hex string.
    pub fn is_well_formed(&self) -> bool {
        !self.host.is_empty()
            && !self.path.is_empty()
            && !self.branch.is_empty()
            && self.commit.len() == ids::COMMIT_HEX_LEN
            && self.commit.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RepoIdentity {
        RepoIdentity {
            host: "github.com".to_string(),
            path: "org/repo".to_string(),
            commit: "0123456789abcdef0123456789abcdef01234567".to_string(),
            branch: "master".to_string(),
        }
    }

    #[test]
    fn full_identity_is_well_formed() {
        assert!(identity().is_well_formed());
    }

    #[test]
    fn short_commit_is_rejected() {
        let mut id = identity();
        id.commit = "abc123".to_string();
        assert!(!id.is_well_formed());
    }

    #[test]
    fn non_hex_commit_is_rejected() {
        let mut id = identity();
        id.commit = "z".repeat(40);
        assert!(!id.is_well_formed());
    }

    #[test]
    fn empty_fields_are_rejected() {
        for field in ["host", "path", "branch"] {
            let mut id = identity();
            match field {
                "host" => id.host.clear(),
                "path" => id.path.clear(),
                _ => id.branch.clear(),
            }
            assert!(!id.is_well_formed(), "{field} may not be empty");
        }
    }
}
