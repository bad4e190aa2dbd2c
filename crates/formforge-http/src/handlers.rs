//! Request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use formforge_auth::User;
use formforge_core::error::SubmissionReport;
use formforge_core::FormForgeError;
use formforge_document::Document;
use formforge_store::{FormRecord, FormStats, SubmissionRecord};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Body of `POST /api/forms`.
#[derive(Debug, Deserialize)]
pub struct CreateFormRequest {
    /// Display name (at least four characters).
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /api/forms/{id}/content`.
#[derive(Debug, Deserialize)]
pub struct UpdateContentRequest {
    /// The serialized document.
    pub content: String,
}

/// Body of `POST /api/submit/{share_url}`.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Submitted values keyed by field instance id.
    #[serde(default)]
    pub values: HashMap<String, String>,
}

/// Response of `GET /api/submit/{share_url}`.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    /// The form's serialized document.
    pub content: String,
}

/// Response of `GET /api/forms/{id}/submissions`.
#[derive(Debug, Serialize)]
pub struct FormWithSubmissions {
    /// The form record.
    pub form: FormRecord,
    /// All submissions, oldest first.
    pub submissions: Vec<SubmissionRecord>,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the authenticated user or fails with 401.
async fn require_user(state: &AppState, headers: &HeaderMap) -> Result<User, ApiError> {
    state
        .auth
        .current_user(bearer_token(headers))
        .await
        .ok_or(ApiError(FormForgeError::NotAuthenticated))
}

/// `GET /api/stats`
pub async fn stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<FormStats>> {
    let user = require_user(&state, &headers).await?;
    Ok(Json(state.store.stats(&user.id).await?))
}

/// `POST /api/forms`
pub async fn create_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateFormRequest>,
) -> ApiResult<(StatusCode, Json<FormRecord>)> {
    let user = require_user(&state, &headers).await?;
    let record = state
        .store
        .create_form(&user.id, &req.name, &req.description)
        .await?;
    tracing::info!(form_id = record.id, owner = %user.id, "form created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/forms`
pub async fn list_forms(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<FormRecord>>> {
    let user = require_user(&state, &headers).await?;
    Ok(Json(state.store.list_forms(&user.id).await?))
}

/// `GET /api/forms/{id}`
pub async fn get_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<FormRecord>> {
    let user = require_user(&state, &headers).await?;
    Ok(Json(state.store.get_form(&user.id, id).await?))
}

/// `PUT /api/forms/{id}/content`
///
/// The content is checked to be a well-formed serialized document before it
/// is stored verbatim.
pub async fn update_content(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(req): Json<UpdateContentRequest>,
) -> ApiResult<StatusCode> {
    let user = require_user(&state, &headers).await?;
    Document::from_json(&req.content)?;
    state.store.update_content(&user.id, id, &req.content).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/forms/{id}/publish`
pub async fn publish_form(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let user = require_user(&state, &headers).await?;
    state.store.publish(&user.id, id).await?;
    tracing::info!(form_id = id, owner = %user.id, "form published");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/forms/{id}/submissions`
pub async fn submissions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> ApiResult<Json<FormWithSubmissions>> {
    let user = require_user(&state, &headers).await?;
    let (form, submissions) = state.store.form_with_submissions(&user.id, id).await?;
    Ok(Json(FormWithSubmissions { form, submissions }))
}

/// `GET /api/submit/{share_url}` — public; counts a visit.
pub async fn visit(
    State(state): State<Arc<AppState>>,
    Path(share_url): Path<String>,
) -> ApiResult<Json<ContentResponse>> {
    let content = state.store.content_by_share_url(&share_url).await?;
    Ok(Json(ContentResponse { content }))
}

/// `POST /api/submit/{share_url}` — public.
///
/// Validates the submitted values against every field instance of the
/// published document; a failure reports every offending field, not just
/// the first.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(share_url): Path<String>,
    Json(req): Json<SubmitRequest>,
) -> ApiResult<(StatusCode, Json<SubmissionReport>)> {
    let content = state.store.published_content(&share_url).await?;
    let document = Document::from_json(&content)?;

    let report = document.validate_submission(&req.values);
    if !report.valid {
        return Err(ApiError(FormForgeError::Validation(report)));
    }

    let stored = serde_json::to_string(&req.values)
        .map_err(|e| FormForgeError::ParseError(e.to_string()))?;
    state.store.record_submission(&share_url, &stored).await?;
    Ok((StatusCode::CREATED, Json(report)))
}
