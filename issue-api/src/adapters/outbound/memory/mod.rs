//! In-memory implementation of the IssueRepository port.
//!
//! Issues live in a `HashMap` from project name to an insertion-ordered `Vec`,
//! next to a single id counter shared by every project. Both sit behind one
//! `RwLock`, so each repository call is atomic with respect to the others.
//! Nothing survives a restart.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Issue, IssueChanges, IssueId, NewIssue, ProjectName},
    ports::outbound::IssueRepository,
    IssueError,
};

struct Store {
    projects: HashMap<String, Vec<Issue>>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            projects: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Process-local issue store.
///
/// Cloning is cheap and clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryIssueRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryIssueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of issues across all projects.
    pub async fn len(&self) -> usize {
        self.store.read().await.projects.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl IssueRepository for InMemoryIssueRepository {
    async fn insert(
        &self,
        project: &ProjectName,
        issue: NewIssue,
        now: OffsetDateTime,
    ) -> Result<Issue, IssueError> {
        let mut store = self.store.write().await;

        let id = IssueId::from(store.next_id);
        store.next_id += 1;

        let issue = Issue::new(id, issue, now);
        store
            .projects
            .entry(project.as_str().to_owned())
            .or_default()
            .push(issue.clone());

        Ok(issue)
    }

    async fn list(&self, project: &ProjectName) -> Result<Vec<Issue>, IssueError> {
        let store = self.store.read().await;
        Ok(store
            .projects
            .get(project.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn update(
        &self,
        project: &ProjectName,
        id: &IssueId,
        changes: &IssueChanges,
        now: OffsetDateTime,
    ) -> Result<bool, IssueError> {
        let mut store = self.store.write().await;

        let issue = store
            .projects
            .get_mut(project.as_str())
            .and_then(|issues| issues.iter_mut().find(|issue| &issue.id == id));

        match issue {
            Some(issue) => {
                changes.apply_to(issue, now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(
        &self,
        project: &ProjectName,
        id: &IssueId,
    ) -> Result<Option<Issue>, IssueError> {
        let mut store = self.store.write().await;

        let Some(issues) = store.projects.get_mut(project.as_str()) else {
            return Ok(None);
        };

        Ok(issues
            .iter()
            .position(|issue| &issue.id == id)
            .map(|index| issues.remove(index)))
    }
}
