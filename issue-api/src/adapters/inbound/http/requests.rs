//! HTTP request payloads for the issue endpoints.
//!
//! Field names follow the wire format, including the `_id` key.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::models::{IssueChanges, IssueDraft, IssueId};

/// Reads a scalar field as text, so one oddly typed field cannot sink the
/// whole body.
///
/// Numbers and booleans become their JSON spelling. Arrays and objects read
/// as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }))
}

/// The `open` flag of an update.
///
/// Only the string `"false"` closes an issue. Any other non-empty value,
/// JSON `false` included, reopens it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OpenFlag {
    Text(String),
    Other(Value),
}

impl OpenFlag {
    /// `None` for an empty string, which counts as "not sent".
    pub fn coerce(&self) -> Option<bool> {
        match self {
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text != "false"),
            Self::Other(_) => Some(true),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateIssuePayload {
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status_text: Option<String>,
}

impl From<CreateIssuePayload> for IssueDraft {
    fn from(payload: CreateIssuePayload) -> Self {
        Self {
            issue_title: payload.issue_title,
            issue_text: payload.issue_text,
            created_by: payload.created_by,
            assigned_to: payload.assigned_to,
            status_text: payload.status_text,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateIssuePayload {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status_text: Option<String>,
    pub open: Option<OpenFlag>,
}

impl UpdateIssuePayload {
    /// Split into the target id and the requested changes.
    pub fn into_parts(self) -> (Option<IssueId>, IssueChanges) {
        let changes = IssueChanges {
            issue_title: self.issue_title,
            issue_text: self.issue_text,
            created_by: self.created_by,
            assigned_to: self.assigned_to,
            status_text: self.status_text,
            open: self.open.as_ref().and_then(OpenFlag::coerce),
        };
        (self.id.map(IssueId::from), changes)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteIssuePayload {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
}

impl DeleteIssuePayload {
    pub fn into_id(self) -> Option<IssueId> {
        self.id.map(IssueId::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_flag_only_false_closes() {
        let flag = |json: &str| -> Option<bool> {
            serde_json::from_str::<OpenFlag>(json)
                .expect("deserialize open flag")
                .coerce()
        };

        assert_eq!(flag("\"false\""), Some(false));
        assert_eq!(flag("false"), Some(true));
        assert_eq!(flag("\"true\""), Some(true));
        assert_eq!(flag("true"), Some(true));
        assert_eq!(flag("\"1\""), Some(true));
        assert_eq!(flag("\"FALSE\""), Some(true));
        assert_eq!(flag("1"), Some(true));
        assert_eq!(flag("\"\""), None);
    }

    #[test]
    fn odd_field_types_keep_the_id() {
        let payload: UpdateIssuePayload = serde_json::from_str(
            r#"{"_id": "3", "issue_title": 5, "assigned_to": ["x"], "open": 1}"#,
        )
        .expect("deserialize update payload");
        let (id, changes) = payload.into_parts();

        assert_eq!(id, Some(IssueId::from("3")));
        assert_eq!(changes.issue_title.as_deref(), Some("5"));
        assert_eq!(changes.assigned_to, None);
        assert_eq!(changes.open, Some(true));
    }

    #[test]
    fn null_open_is_not_sent() {
        let payload: UpdateIssuePayload = serde_json::from_str(r#"{"_id": "3", "open": null}"#)
            .expect("deserialize update payload");
        assert_eq!(payload.into_parts().1.open, None);
    }

    #[test]
    fn update_payload_reads_wire_id() {
        let payload: UpdateIssuePayload =
            serde_json::from_str(r#"{"_id": "7", "issue_title": "New", "unknown": 1}"#)
                .expect("deserialize update payload");
        let (id, changes) = payload.into_parts();

        assert_eq!(id, Some(IssueId::from("7")));
        assert_eq!(changes.issue_title.as_deref(), Some("New"));
        assert_eq!(changes.open, None);
    }

    #[test]
    fn numeric_id_is_accepted() {
        let payload: DeleteIssuePayload =
            serde_json::from_str(r#"{"_id": 42}"#).expect("deserialize delete payload");
        assert_eq!(payload.into_id(), Some(IssueId::from("42")));
    }

    #[test]
    fn create_payload_maps_to_draft() {
        let payload: CreateIssuePayload =
            serde_json::from_str(r#"{"issue_title": "T", "created_by": "C"}"#)
                .expect("deserialize create payload");
        let draft = IssueDraft::from(payload);

        assert_eq!(draft.issue_title.as_deref(), Some("T"));
        assert_eq!(draft.issue_text, None);
        assert_eq!(draft.created_by.as_deref(), Some("C"));
    }
}
