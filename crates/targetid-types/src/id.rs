use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque scan-target identifier.
///
/// Always of the form `pkg:<scheme>/<scheme-specific-part>[#<fragment>]`.
/// Immutable once produced; callers treat it as a value and memoize it
/// themselves if they need stability across a long-running process.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TargetId> for String {
    fn from(value: TargetId) -> Self {
        value.0
    }
}
