//! Issue repository port (outbound).
//!
//! Defines the interface for storing issues grouped by project.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Issue, IssueChanges, IssueId, NewIssue, ProjectName},
    IssueError,
};

/// Outbound port for issue storage.
///
/// Implementations own id allocation: ids must be unique across all projects.
/// Each method must be atomic with respect to concurrent callers.
#[async_trait]
pub trait IssueRepository: Send + Sync + 'static {
    /// Allocate an id, store the issue at the end of `project`'s list and
    /// return the stored record.
    async fn insert(
        &self,
        project: &ProjectName,
        issue: NewIssue,
        now: OffsetDateTime,
    ) -> Result<Issue, IssueError>;

    /// A snapshot of `project`'s issues in insertion order.
    async fn list(&self, project: &ProjectName) -> Result<Vec<Issue>, IssueError>;

    /// Apply `changes` to the first issue with `id`.
    ///
    /// Returns `false` if `project` has no such issue.
    async fn update(
        &self,
        project: &ProjectName,
        id: &IssueId,
        changes: &IssueChanges,
        now: OffsetDateTime,
    ) -> Result<bool, IssueError>;

    /// Remove the issue with `id`, keeping the order of the rest.
    ///
    /// Returns the removed issue, or `None` if `project` has no such issue.
    async fn remove(
        &self,
        project: &ProjectName,
        id: &IssueId,
    ) -> Result<Option<Issue>, IssueError>;
}
