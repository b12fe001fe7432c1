use serde::{Deserialize, Serialize};
use std::fmt;

/// An issue identifier.
///
/// Issued by the store as a decimal string ("1", "2", ...) and unique across
/// every project, not just the one the issue lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(String);

impl IssueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for IssueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for IssueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for IssueId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for IssueId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// The free-text name a set of issues is filed under.
///
/// Projects have no record of their own; one exists as soon as an issue is
/// created for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProjectName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for ProjectName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
