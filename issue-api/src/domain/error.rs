use strum::Display;
use thiserror::Error;

use super::models::IssueId;

/// The mutation a lookup failed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IssueAction {
    Update,
    Delete,
}

/// Errors that can occur during issue operations.
///
/// None of these are faults: each one is turned into a structured result at
/// the operation boundary. The display strings are the messages clients see.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IssueError {
    #[error("required field(s) missing")]
    RequiredFieldsMissing,
    #[error("missing _id")]
    MissingId,
    #[error("no update field(s) sent")]
    NoUpdateFields(IssueId),
    #[error("could not {action}")]
    NotFound { id: IssueId, action: IssueAction },
}

impl IssueError {
    /// The id the failing request referred to, if it carried one.
    pub fn issue_id(&self) -> Option<&IssueId> {
        match self {
            Self::NoUpdateFields(id) | Self::NotFound { id, .. } => Some(id),
            Self::RequiredFieldsMissing | Self::MissingId => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_failed_action() {
        let update = IssueError::NotFound {
            id: IssueId::from("5"),
            action: IssueAction::Update,
        };
        let delete = IssueError::NotFound {
            id: IssueId::from("5"),
            action: IssueAction::Delete,
        };

        assert_eq!(update.to_string(), "could not update");
        assert_eq!(delete.to_string(), "could not delete");
        assert_eq!(delete.issue_id(), Some(&IssueId::from("5")));
    }

    #[test]
    fn missing_id_carries_no_id() {
        assert_eq!(IssueError::MissingId.to_string(), "missing _id");
        assert_eq!(IssueError::MissingId.issue_id(), None);
    }
}
