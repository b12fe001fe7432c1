use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Issue, IssueChanges, IssueDraft, IssueFilter, IssueId, NewIssue, ProjectName},
    ports::{inbound::IssueService, outbound::IssueRepository},
    IssueAction, IssueError,
};

/// Implementation of the IssueService inbound port.
///
/// Validates requests and enforces the error precedence of each operation,
/// then hands the mutation to an IssueRepository (outbound port).
pub struct IssueServiceImpl<R> {
    repo: Arc<R>,
}

impl<R> IssueServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn require_id(id: Option<IssueId>) -> Result<IssueId, IssueError> {
    id.filter(|id| !id.is_empty()).ok_or(IssueError::MissingId)
}

#[async_trait]
impl<R: IssueRepository> IssueService for IssueServiceImpl<R> {
    async fn create_issue(
        &self,
        project: &ProjectName,
        draft: IssueDraft,
    ) -> Result<Issue, IssueError> {
        let Some(new_issue) = NewIssue::from_draft(draft) else {
            tracing::debug!(%project, "rejected issue with missing required fields");
            return Err(IssueError::RequiredFieldsMissing);
        };

        let issue = self
            .repo
            .insert(project, new_issue, OffsetDateTime::now_utc())
            .await?;

        tracing::info!(%project, id = %issue.id, "created issue");
        Ok(issue)
    }

    async fn list_issues(
        &self,
        project: &ProjectName,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, IssueError> {
        let issues = self.repo.list(project).await?;

        if filter.is_empty() {
            return Ok(issues);
        }

        Ok(issues
            .into_iter()
            .filter(|issue| issue.matches(filter))
            .collect())
    }

    async fn update_issue(
        &self,
        project: &ProjectName,
        id: Option<IssueId>,
        changes: IssueChanges,
    ) -> Result<IssueId, IssueError> {
        let id = require_id(id)?;

        let changes = changes.normalized();
        if changes.is_empty() {
            tracing::debug!(%project, %id, "update carried no fields");
            return Err(IssueError::NoUpdateFields(id));
        }

        let updated = self
            .repo
            .update(project, &id, &changes, OffsetDateTime::now_utc())
            .await?;

        if !updated {
            tracing::debug!(%project, %id, "update target not found");
            return Err(IssueError::NotFound {
                id,
                action: IssueAction::Update,
            });
        }

        tracing::info!(%project, %id, "updated issue");
        Ok(id)
    }

    async fn delete_issue(
        &self,
        project: &ProjectName,
        id: Option<IssueId>,
    ) -> Result<IssueId, IssueError> {
        let id = require_id(id)?;

        match self.repo.remove(project, &id).await? {
            Some(_) => {
                tracing::info!(%project, %id, "deleted issue");
                Ok(id)
            }
            None => {
                tracing::debug!(%project, %id, "delete target not found");
                Err(IssueError::NotFound {
                    id,
                    action: IssueAction::Delete,
                })
            }
        }
    }
}
