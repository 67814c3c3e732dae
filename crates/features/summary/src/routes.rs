//! Axum routes for the summary view and the CSV download.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vhub_builder::Sessions;
use vhub_derive::api_handler;
use vhub_domain::constants::SUMMARY_TAG;
use vhub_kernel::prelude::{ApiError, ApiState, SessionGuard};

use crate::SummaryError;

impl From<SummaryError> for ApiError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::EmptyBuild { .. } => Self::unprocessable(err.to_string()),
            SummaryError::Internal { .. } => Self::internal(err.to_string()),
        }
    }
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(get_summary)).routes(routes!(export_csv))
}

#[api_handler(
    get,
    path = "/sessions/{id}/summary",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = OK, description = "Priced breakdown with purchase links"),
        (status = NOT_FOUND, description = "Unknown or expired session"),
        (status = UNPROCESSABLE_ENTITY, description = "No frame selected yet"),
    ),
    tag = SUMMARY_TAG,
)]
async fn get_summary(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    let session = sessions.get(&id)?;

    let summary = crate::summarize(&session.read())?;
    Ok(Json(summary))
}

#[api_handler(
    get,
    path = "/sessions/{id}/export",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = OK, description = "CSV build sheet", content_type = "text/csv"),
        (status = NOT_FOUND, description = "Unknown or expired session"),
        (status = UNPROCESSABLE_ENTITY, description = "No frame selected yet"),
    ),
    tag = SUMMARY_TAG,
)]
async fn export_csv(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = SessionGuard::verify(id)?;
    let sessions = state.try_get_slice::<Sessions>()?;
    let session = sessions.get(&id)?;

    let (csv, file_name) = {
        let build = session.read();
        (crate::render_csv(&build)?, crate::export_file_name(&build)?)
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        csv,
    ))
}
