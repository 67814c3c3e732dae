//! Axum routes for creating and mutating build sessions.
//!
//! Handlers resolve frame/part ids against the catalog slice before touching
//! the store, so the store itself only ever sees catalog-backed definitions.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vhub_catalog::Catalog;
use vhub_derive::{api_handler, api_model};
use vhub_domain::catalog::{FrameDefinition, PartCategory, PartDefinition};
use vhub_domain::constants::SESSION_TAG;
use vhub_kernel::prelude::{ApiError, ApiState, SessionGuard};

use crate::{Build, BuildError, Sessions};

impl From<BuildError> for ApiError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::SessionNotFound { .. } => Self::not_found(err.to_string()),
            BuildError::NoFrame { .. }
            | BuildError::UnknownColor { .. }
            | BuildError::CategoryMismatch { .. } => Self::unprocessable(err.to_string()),
            BuildError::Internal { .. } => Self::internal(err.to_string()),
        }
    }
}

/// Response mirror of a session's build state plus the derived total.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildView {
    frame: Option<Arc<FrameDefinition>>,
    frame_color: String,
    parts: BTreeMap<PartCategory, Arc<PartDefinition>>,
    total_price: u32,
}

impl From<&Build> for BuildView {
    fn from(build: &Build) -> Self {
        Self {
            frame: build.frame().cloned(),
            frame_color: build.frame_color().to_owned(),
            parts: build.parts().clone(),
            total_price: build.total_price(),
        }
    }
}

#[api_model]
pub struct SessionCreated {
    pub session_id: String,
}

#[api_model]
pub struct SelectFrame {
    pub frame_id: String,
}

#[api_model]
pub struct SelectColor {
    pub color: String,
}

#[api_model]
pub struct SelectPart {
    /// The part to select, or `null` to clear the slot.
    pub part_id: Option<String>,
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(create_session))
        .routes(routes!(get_session, end_session))
        .routes(routes!(select_frame))
        .routes(routes!(select_color))
        .routes(routes!(select_part))
        .routes(routes!(reset_session))
}

#[api_handler(
    post,
    path = "/sessions",
    responses((status = CREATED, description = "New empty session", body = SessionCreated)),
    tag = SESSION_TAG,
)]
async fn create_session(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let sessions = state.try_get_slice::<Sessions>()?;
    let session_id = sessions.create();
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

#[api_handler(
    get,
    path = "/sessions/{id}",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = OK, description = "Current build state"),
        (status = NOT_FOUND, description = "Unknown or expired session"),
    ),
    tag = SESSION_TAG,
)]
async fn get_session(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    let session = sessions.get(&id)?;
    let view = BuildView::from(&*session.read());
    Ok(Json(view))
}

#[api_handler(
    put,
    path = "/sessions/{id}/frame",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = OK, description = "Frame adopted; color defaulted; parts cleared"),
        (status = NOT_FOUND, description = "Unknown session or frame id"),
    ),
    tag = SESSION_TAG,
)]
async fn select_frame(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<SelectFrame>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    let catalog = state.try_get_slice::<Catalog>()?;

    let frame = catalog.frame(&body.frame_id)?.clone();
    let session = sessions.get(&id)?;

    let mut build = session.write();
    build.set_frame(frame);
    Ok(Json(BuildView::from(&*build)))
}

#[api_handler(
    put,
    path = "/sessions/{id}/color",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = OK, description = "Color applied"),
        (status = NOT_FOUND, description = "Unknown or expired session"),
        (status = UNPROCESSABLE_ENTITY, description = "No frame selected or color not declared"),
    ),
    tag = SESSION_TAG,
)]
async fn select_color(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<SelectColor>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    let session = sessions.get(&id)?;

    let mut build = session.write();
    build.set_color(body.color)?;
    Ok(Json(BuildView::from(&*build)))
}

#[api_handler(
    put,
    path = "/sessions/{id}/parts/{category}",
    params(
        ("id" = String, Path, description = "Session id"),
        ("category" = String, Path, description = "Part category (lowercase)"),
    ),
    responses(
        (status = OK, description = "Selection updated"),
        (status = NOT_FOUND, description = "Unknown session or part id"),
        (status = UNPROCESSABLE_ENTITY, description = "Part does not belong to the category"),
    ),
    tag = SESSION_TAG,
)]
async fn select_part(
    State(state): State<ApiState>,
    Path((id, category)): Path<(String, PartCategory)>,
    Json(body): Json<SelectPart>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    let catalog = state.try_get_slice::<Catalog>()?;

    let part = match &body.part_id {
        Some(part_id) => Some(catalog.part(category, part_id)?.clone()),
        None => None,
    };
    let session = sessions.get(&id)?;

    let mut build = session.write();
    build.set_part(category, part)?;
    Ok(Json(BuildView::from(&*build)))
}

#[api_handler(
    post,
    path = "/sessions/{id}/reset",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = OK, description = "Session restored to the empty initial value"),
        (status = NOT_FOUND, description = "Unknown or expired session"),
    ),
    tag = SESSION_TAG,
)]
async fn reset_session(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    let session = sessions.get(&id)?;

    let mut build = session.write();
    build.reset();
    Ok(Json(BuildView::from(&*build)))
}

#[api_handler(
    delete,
    path = "/sessions/{id}",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = NO_CONTENT, description = "Session ended"),
        (status = NOT_FOUND, description = "Unknown or expired session"),
    ),
    tag = SESSION_TAG,
)]
async fn end_session(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    sessions.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
