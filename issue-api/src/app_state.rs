use std::sync::Arc;

use crate::{
    adapters::outbound::memory::InMemoryIssueRepository,
    domain::{ports::inbound::IssueService, services::IssueServiceImpl},
};

/// Shared handler state.
///
/// Holds the issue service behind its inbound port so handlers never see the
/// concrete store.
#[derive(Clone)]
pub struct AppState {
    pub issue_service: Arc<dyn IssueService>,
}

impl AppState {
    pub fn new(issue_service: Arc<dyn IssueService>) -> Self {
        Self { issue_service }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryIssueRepository::new());
        Self::new(Arc::new(IssueServiceImpl::new(repo)))
    }
}
