use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::IssueId;

/// A tracked issue, as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub id: IssueId,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub created_on: OffsetDateTime,
    pub updated_on: OffsetDateTime,
    pub open: bool,
}

impl Issue {
    /// Build a freshly created issue. Both timestamps are set to `now`.
    pub fn new(id: IssueId, issue: NewIssue, now: OffsetDateTime) -> Self {
        Self {
            id,
            issue_title: issue.issue_title,
            issue_text: issue.issue_text,
            created_by: issue.created_by,
            assigned_to: issue.assigned_to,
            status_text: issue.status_text,
            created_on: now,
            updated_on: now,
            open: true,
        }
    }

    /// True when every criterion in `filter` holds for this issue.
    pub fn matches(&self, filter: &IssueFilter) -> bool {
        filter
            .criteria()
            .iter()
            .all(|(field, value)| self.field_matches(field, value))
    }

    fn field_matches(&self, field: &FilterField, value: &str) -> bool {
        match field {
            FilterField::Id => self.id.as_str() == value,
            FilterField::IssueTitle => self.issue_title == value,
            FilterField::IssueText => self.issue_text == value,
            FilterField::CreatedBy => self.created_by == value,
            FilterField::AssignedTo => self.assigned_to == value,
            FilterField::StatusText => self.status_text == value,
            FilterField::CreatedOn => timestamp_matches(&self.created_on, value),
            FilterField::UpdatedOn => timestamp_matches(&self.updated_on, value),
            FilterField::Open => self.open.to_string() == value,
            FilterField::Unknown(_) => false,
        }
    }
}

fn timestamp_matches(timestamp: &OffsetDateTime, value: &str) -> bool {
    timestamp
        .format(&Rfc3339)
        .map(|formatted| formatted == value)
        .unwrap_or(false)
}

/// Unvalidated input for creating an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

/// A validated issue ready to be stored.
///
/// Required fields are non-empty; optional fields default to "".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
}

impl NewIssue {
    /// Returns `None` if any of title, text or creator is missing or empty.
    pub fn from_draft(draft: IssueDraft) -> Option<Self> {
        Some(Self {
            issue_title: non_empty(draft.issue_title)?,
            issue_text: non_empty(draft.issue_text)?,
            created_by: non_empty(draft.created_by)?,
            assigned_to: draft.assigned_to.unwrap_or_default(),
            status_text: draft.status_text.unwrap_or_default(),
        })
    }
}

/// A partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueChanges {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl IssueChanges {
    /// Drop empty-string values; an empty string is never applied as an update.
    pub fn normalized(self) -> Self {
        Self {
            issue_title: non_empty(self.issue_title),
            issue_text: non_empty(self.issue_text),
            created_by: non_empty(self.created_by),
            assigned_to: non_empty(self.assigned_to),
            status_text: non_empty(self.status_text),
            open: self.open,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issue_title.is_none()
            && self.issue_text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }

    /// Write the supplied fields into `issue` and bump `updated_on`.
    pub fn apply_to(&self, issue: &mut Issue, now: OffsetDateTime) {
        if let Some(title) = &self.issue_title {
            issue.issue_title = title.clone();
        }
        if let Some(text) = &self.issue_text {
            issue.issue_text = text.clone();
        }
        if let Some(created_by) = &self.created_by {
            issue.created_by = created_by.clone();
        }
        if let Some(assigned_to) = &self.assigned_to {
            issue.assigned_to = assigned_to.clone();
        }
        if let Some(status_text) = &self.status_text {
            issue.status_text = status_text.clone();
        }
        if let Some(open) = self.open {
            issue.open = open;
        }
        issue.updated_on = now;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A field an issue list can be filtered on, keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    Id,
    IssueTitle,
    IssueText,
    CreatedBy,
    AssignedTo,
    StatusText,
    CreatedOn,
    UpdatedOn,
    Open,
    /// A key outside the issue schema. Never matches.
    Unknown(String),
}

impl From<&str> for FilterField {
    fn from(key: &str) -> Self {
        match key {
            "_id" => Self::Id,
            "issue_title" => Self::IssueTitle,
            "issue_text" => Self::IssueText,
            "created_by" => Self::CreatedBy,
            "assigned_to" => Self::AssignedTo,
            "status_text" => Self::StatusText,
            "created_on" => Self::CreatedOn,
            "updated_on" => Self::UpdatedOn,
            "open" => Self::Open,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Equality criteria combined with logical AND. Empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    criteria: Vec<(FilterField, String)>,
}

impl IssueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<FilterField>, value: impl Into<String>) -> Self {
        self.criteria.push((field.into(), value.into()));
        self
    }

    pub fn criteria(&self) -> &[(FilterField, String)] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for IssueFilter
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            criteria: iter
                .into_iter()
                .map(|(key, value)| (FilterField::from(key.as_ref()), value.into()))
                .collect(),
        }
    }
}
