use camino::{Utf8Path, Utf8PathBuf};

/// Find the root of the repository enclosing `start`, if any.
///
/// Starts at `start` itself (or its containing directory if it is a file)
/// and walks parent by parent until a `.git` entry is found or the
/// filesystem root is reached. An explicit loop, not recursion, so deep
/// hierarchies cannot grow the stack. A `.git` plain file (worktrees,
/// submodule checkouts) counts as a hit; the inspector decides whether it
/// is actually usable.
pub fn find_repo_root(start: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut cursor = if start.is_file() { start.parent()? } else { start };

    loop {
        if cursor.join(".git").exists() {
            return Some(cursor.to_owned());
        }
        cursor = cursor.parent()?;
    }
}
