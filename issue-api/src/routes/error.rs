use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{models::IssueId, IssueError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

/// An issue error reported in the response body.
///
/// Always sent with 200: clients tell success from failure by the `error`
/// key, not the status line.
#[derive(Debug)]
pub struct ApiError {
    message: String,
    id: Option<IssueId>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} ({})", self.message, id),
            None => write!(f, "{}", self.message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            id: self.id.map(|id| id.to_string()),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

impl From<IssueError> for ApiError {
    fn from(err: IssueError) -> Self {
        Self {
            id: err.issue_id().cloned(),
            message: err.to_string(),
        }
    }
}
