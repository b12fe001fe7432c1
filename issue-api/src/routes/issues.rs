use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{
        CreateIssuePayload, DeleteIssuePayload, IssueResponse, IssueResultResponse, Payload,
        UpdateIssuePayload,
    },
    app_state::AppState,
    domain::models::{IssueFilter, ProjectName},
};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/:project",
        get(list_issues)
            .post(create_issue)
            .put(update_issue)
            .delete(delete_issue),
    )
}

#[instrument(name = "GET /api/issues/:project", skip(app_state))]
async fn list_issues(
    State(app_state): State<AppState>,
    Path(project): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<IssueResponse>>, ApiError> {
    let filter: IssueFilter = params.into_iter().collect();

    let issues = app_state
        .issue_service
        .list_issues(&ProjectName::from(project), &filter)
        .await?;

    Ok(Json(issues.into_iter().map(Into::into).collect()))
}

#[instrument(name = "POST /api/issues/:project", skip(app_state))]
async fn create_issue(
    State(app_state): State<AppState>,
    Path(project): Path<String>,
    Payload(body): Payload<CreateIssuePayload>,
) -> Result<Json<IssueResponse>, ApiError> {
    let issue = app_state
        .issue_service
        .create_issue(&ProjectName::from(project), body.into())
        .await?;

    Ok(Json(issue.into()))
}

#[instrument(name = "PUT /api/issues/:project", skip(app_state))]
async fn update_issue(
    State(app_state): State<AppState>,
    Path(project): Path<String>,
    Payload(body): Payload<UpdateIssuePayload>,
) -> Result<Json<IssueResultResponse>, ApiError> {
    let (id, changes) = body.into_parts();

    let id = app_state
        .issue_service
        .update_issue(&ProjectName::from(project), id, changes)
        .await?;

    Ok(Json(IssueResultResponse::updated(id)))
}

#[instrument(name = "DELETE /api/issues/:project", skip(app_state))]
async fn delete_issue(
    State(app_state): State<AppState>,
    Path(project): Path<String>,
    Payload(body): Payload<DeleteIssuePayload>,
) -> Result<Json<IssueResultResponse>, ApiError> {
    let id = app_state
        .issue_service
        .delete_issue(&ProjectName::from(project), body.into_id())
        .await?;

    Ok(Json(IssueResultResponse::deleted(id)))
}
