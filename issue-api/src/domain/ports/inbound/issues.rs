use async_trait::async_trait;

use crate::domain::{
    models::{Issue, IssueChanges, IssueDraft, IssueFilter, IssueId, ProjectName},
    IssueError,
};

/// Inbound port for issue tracking.
///
/// These are the use cases HTTP handlers invoke. Every operation is a single
/// atomic step against the store; failures come back as [`IssueError`]s.
#[async_trait]
pub trait IssueService: Send + Sync + 'static {
    /// Validate `draft` and file it under `project`.
    ///
    /// Returns the stored issue with its new id and timestamps.
    async fn create_issue(
        &self,
        project: &ProjectName,
        draft: IssueDraft,
    ) -> Result<Issue, IssueError>;

    /// Issues of `project` matching every criterion in `filter`, in creation order.
    ///
    /// An unknown project yields an empty list.
    async fn list_issues(
        &self,
        project: &ProjectName,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, IssueError>;

    /// Apply `changes` to the issue with `id`.
    ///
    /// Checked in order: missing id, nothing to change, unknown id.
    async fn update_issue(
        &self,
        project: &ProjectName,
        id: Option<IssueId>,
        changes: IssueChanges,
    ) -> Result<IssueId, IssueError>;

    /// Remove the issue with `id` from `project`.
    async fn delete_issue(
        &self,
        project: &ProjectName,
        id: Option<IssueId>,
    ) -> Result<IssueId, IssueError>;
}
