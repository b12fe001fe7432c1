//! HTTP response types for the issue endpoints.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::models::{Issue, IssueId};

/// A stored issue as returned by create and query.
#[derive(Debug, Serialize)]
pub struct IssueResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_on: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_on: OffsetDateTime,
    pub open: bool,
}

impl From<Issue> for IssueResponse {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id.to_string(),
            issue_title: issue.issue_title,
            issue_text: issue.issue_text,
            created_by: issue.created_by,
            assigned_to: issue.assigned_to,
            status_text: issue.status_text,
            created_on: issue.created_on,
            updated_on: issue.updated_on,
            open: issue.open,
        }
    }
}

/// Acknowledgement for a successful update or delete.
#[derive(Debug, Serialize)]
pub struct IssueResultResponse {
    pub result: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
}

impl IssueResultResponse {
    pub fn updated(id: IssueId) -> Self {
        Self {
            result: "successfully updated",
            id: id.to_string(),
        }
    }

    pub fn deleted(id: IssueId) -> Self {
        Self {
            result: "successfully deleted",
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{IssueDraft, NewIssue};
    use time::macros::datetime;

    #[test]
    fn issue_response_uses_wire_field_names() {
        let new_issue = NewIssue::from_draft(IssueDraft {
            issue_title: Some("Title".to_string()),
            issue_text: Some("Text".to_string()),
            created_by: Some("Alice".to_string()),
            ..Default::default()
        })
        .expect("valid draft");
        let issue = Issue::new(IssueId::from(3), new_issue, datetime!(2024-01-02 03:04:05 UTC));

        let json = serde_json::to_value(IssueResponse::from(issue)).expect("serialize issue");
        assert_eq!(
            json,
            serde_json::json!({
                "_id": "3",
                "issue_title": "Title",
                "issue_text": "Text",
                "created_by": "Alice",
                "assigned_to": "",
                "status_text": "",
                "created_on": "2024-01-02T03:04:05Z",
                "updated_on": "2024-01-02T03:04:05Z",
                "open": true,
            })
        );
    }

    #[test]
    fn result_response_carries_id() {
        let json = serde_json::to_value(IssueResultResponse::deleted(IssueId::from("9")))
            .expect("serialize result");
        assert_eq!(
            json,
            serde_json::json!({ "result": "successfully deleted", "_id": "9" })
        );
    }
}
