use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, request::Parts};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router, extract::FromRequestParts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;
use quill_service::{
	ClearAccountResponse, DashboardResponse, Error as ServiceError, NoteCreateRequest,
	NoteFromTemplateRequest, NoteResponse, NoteTagResponse, NoteUpdateRequest,
	NotebookCreateRequest, NotebookResponse, NotebookUpdateRequest, QuickNoteRequest,
	SearchResponse, TagCreateRequest, TagResponse, TagUpdateRequest, TemplateCreateRequest,
	TemplateFromNoteRequest, TemplateResponse, TemplateUpdateRequest,
};

const OWNER_HEADER: &str = "x-user-id";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/notebooks", post(create_notebook).get(list_notebooks))
		.route(
			"/v1/notebooks/{notebook_id}",
			get(get_notebook).patch(update_notebook).delete(delete_notebook),
		)
		.route("/v1/notebooks/{notebook_id}/notes", post(create_note).get(list_notes))
		.route(
			"/v1/notebooks/{notebook_id}/notes/{note_id}",
			get(get_note).patch(update_note).delete(delete_note),
		)
		.route(
			"/v1/notebooks/{notebook_id}/notes/{note_id}/tags/{tag_id}",
			post(add_tag_to_note).delete(remove_tag_from_note),
		)
		.route(
			"/v1/notebooks/{notebook_id}/notes/{note_id}/template",
			post(create_template_from_note),
		)
		.route("/v1/notes", get(list_all_notes))
		.route("/v1/notes/quick", post(create_quick_note))
		.route("/v1/tags", post(create_tag).get(list_tags))
		.route("/v1/tags/{tag_id}", get(get_tag).patch(update_tag).delete(delete_tag))
		.route("/v1/templates", post(create_template).get(list_templates))
		.route(
			"/v1/templates/{template_id}",
			get(get_template).patch(update_template).delete(delete_template),
		)
		.route(
			"/v1/templates/{template_id}/notebooks/{notebook_id}/notes",
			post(create_note_from_template),
		)
		.route("/v1/dashboard", get(dashboard))
		.route("/v1/search", get(search))
		.route("/v1/account", delete(clear_account))
		.with_state(state)
}

/// The identity collaborator in front of this service verifies credentials
/// and forwards the owner id in a trusted header; the core never re-checks
/// it.
pub struct OwnerId(pub Uuid);

impl<S> FromRequestParts<S> for OwnerId
where
	S: Send + Sync,
{
	type Rejection = ApiError;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let raw = parts
			.headers
			.get(OWNER_HEADER)
			.and_then(|value| value.to_str().ok())
			.ok_or_else(|| {
				json_error(
					StatusCode::UNAUTHORIZED,
					"unauthenticated",
					format!("Missing {OWNER_HEADER} header."),
				)
			})?;
		let owner = Uuid::parse_str(raw).map_err(|_| {
			json_error(
				StatusCode::UNAUTHORIZED,
				"unauthenticated",
				format!("Invalid {OWNER_HEADER} header."),
			)
		})?;

		Ok(Self(owner))
	}
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn create_notebook(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Json(payload): Json<NotebookCreateRequest>,
) -> Result<(StatusCode, Json<NotebookResponse>), ApiError> {
	let response = state.service.create_notebook(owner, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn list_notebooks(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
) -> Result<Json<Vec<NotebookResponse>>, ApiError> {
	let response = state.service.list_notebooks(owner).await?;

	Ok(Json(response))
}

async fn get_notebook(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(notebook_id): Path<Uuid>,
) -> Result<Json<NotebookResponse>, ApiError> {
	let response = state.service.get_notebook(owner, notebook_id).await?;

	Ok(Json(response))
}

async fn update_notebook(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(notebook_id): Path<Uuid>,
	Json(payload): Json<NotebookUpdateRequest>,
) -> Result<Json<NotebookResponse>, ApiError> {
	let response = state.service.update_notebook(owner, notebook_id, payload).await?;

	Ok(Json(response))
}

async fn delete_notebook(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(notebook_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_notebook(owner, notebook_id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn create_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(notebook_id): Path<Uuid>,
	Json(payload): Json<NoteCreateRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
	let response = state.service.create_note(owner, notebook_id, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn list_notes(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(notebook_id): Path<Uuid>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
	let response = state.service.list_notes(owner, notebook_id).await?;

	Ok(Json(response))
}

async fn get_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path((notebook_id, note_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<NoteResponse>, ApiError> {
	let response = state.service.get_note(owner, notebook_id, note_id).await?;

	Ok(Json(response))
}

async fn update_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path((notebook_id, note_id)): Path<(Uuid, Uuid)>,
	Json(payload): Json<NoteUpdateRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
	let response = state.service.update_note(owner, notebook_id, note_id, payload).await?;

	Ok(Json(response))
}

async fn delete_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path((notebook_id, note_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_note(owner, notebook_id, note_id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn add_tag_to_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path((notebook_id, note_id, tag_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<(StatusCode, Json<NoteTagResponse>), ApiError> {
	let response = state.service.add_tag_to_note(owner, notebook_id, note_id, tag_id).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn remove_tag_from_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path((notebook_id, note_id, tag_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
	state.service.remove_tag_from_note(owner, notebook_id, note_id, tag_id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn create_template_from_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path((notebook_id, note_id)): Path<(Uuid, Uuid)>,
	Json(payload): Json<TemplateFromNoteRequest>,
) -> Result<(StatusCode, Json<TemplateResponse>), ApiError> {
	let response =
		state.service.create_template_from_note(owner, notebook_id, note_id, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn create_note_from_template(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path((template_id, notebook_id)): Path<(Uuid, Uuid)>,
	Json(payload): Json<NoteFromTemplateRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
	let response =
		state.service.create_note_from_template(owner, template_id, notebook_id, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn list_all_notes(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
	let response = state.service.list_all_notes(owner).await?;

	Ok(Json(response))
}

async fn create_quick_note(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Json(payload): Json<QuickNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
	let response = state.service.create_quick_note(owner, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn create_tag(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Json(payload): Json<TagCreateRequest>,
) -> Result<(StatusCode, Json<TagResponse>), ApiError> {
	let response = state.service.create_tag(owner, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn list_tags(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
) -> Result<Json<Vec<TagResponse>>, ApiError> {
	let response = state.service.list_tags(owner).await?;

	Ok(Json(response))
}

async fn get_tag(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(tag_id): Path<Uuid>,
) -> Result<Json<TagResponse>, ApiError> {
	let response = state.service.get_tag(owner, tag_id).await?;

	Ok(Json(response))
}

async fn update_tag(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(tag_id): Path<Uuid>,
	Json(payload): Json<TagUpdateRequest>,
) -> Result<Json<TagResponse>, ApiError> {
	let response = state.service.update_tag(owner, tag_id, payload).await?;

	Ok(Json(response))
}

async fn delete_tag(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(tag_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_tag(owner, tag_id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn create_template(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Json(payload): Json<TemplateCreateRequest>,
) -> Result<(StatusCode, Json<TemplateResponse>), ApiError> {
	let response = state.service.create_template(owner, payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn list_templates(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
) -> Result<Json<Vec<TemplateResponse>>, ApiError> {
	let response = state.service.list_templates(owner).await?;

	Ok(Json(response))
}

async fn get_template(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(template_id): Path<Uuid>,
) -> Result<Json<TemplateResponse>, ApiError> {
	let response = state.service.get_template(owner, template_id).await?;

	Ok(Json(response))
}

async fn update_template(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(template_id): Path<Uuid>,
	Json(payload): Json<TemplateUpdateRequest>,
) -> Result<Json<TemplateResponse>, ApiError> {
	let response = state.service.update_template(owner, template_id, payload).await?;

	Ok(Json(response))
}

async fn delete_template(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Path(template_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_template(owner, template_id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn dashboard(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
) -> Result<Json<DashboardResponse>, ApiError> {
	let response = state.service.dashboard(owner).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
	#[serde(default)]
	q: String,
}

async fn search(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
	Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(owner, &params.q).await?;

	Ok(Json(response))
}

async fn clear_account(
	State(state): State<AppState>,
	OwnerId(owner): OwnerId,
) -> Result<Json<ClearAccountResponse>, ApiError> {
	let response = state.service.clear_account(owner).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

fn json_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
	ApiError { status, error_code: code.to_string(), message: message.into() }
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::NotFound { message } =>
				json_error(StatusCode::NOT_FOUND, "not_found", message),
			ServiceError::Conflict { message } =>
				json_error(StatusCode::CONFLICT, "conflict", message),
			ServiceError::InvalidRequest { message } =>
				json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_request", message),
			ServiceError::Storage { message } => {
				tracing::error!(%message, "Storage failure.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage", "Internal storage error.")
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
