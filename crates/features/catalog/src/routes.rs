//! Axum routes for read-only catalog queries.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use vhub_derive::api_handler;
use vhub_domain::catalog::PartCategory;
use vhub_domain::constants::CATALOG_TAG;
use vhub_kernel::prelude::{ApiError, ApiState};

use crate::{Catalog, CatalogError};

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownFrame { .. } | CatalogError::UnknownPart { .. } => {
                Self::not_found(err.to_string())
            }
            _ => Self::internal(err.to_string()),
        }
    }
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_frames))
        .routes(routes!(get_frame))
        .routes(routes!(list_compatible_parts))
}

#[api_handler(
    get,
    path = "/catalog/frames",
    responses((status = OK, description = "All frames in declaration order")),
    tag = CATALOG_TAG,
)]
async fn list_frames(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    Ok(Json(catalog.frames().to_vec()))
}

#[api_handler(
    get,
    path = "/catalog/frames/{id}",
    params(("id" = String, Path, description = "Frame id")),
    responses(
        (status = OK, description = "The frame definition"),
        (status = NOT_FOUND, description = "Frame id is not in the catalog"),
    ),
    tag = CATALOG_TAG,
)]
async fn get_frame(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    let frame = catalog.frame(&id)?;
    Ok(Json(frame.clone()))
}

#[api_handler(
    get,
    path = "/catalog/frames/{id}/compatible/{category}",
    params(
        ("id" = String, Path, description = "Frame id"),
        ("category" = String, Path, description = "Part category (lowercase)"),
    ),
    responses(
        (status = OK, description = "Parts of the category compatible with the frame"),
        (status = NOT_FOUND, description = "Frame id is not in the catalog"),
    ),
    tag = CATALOG_TAG,
)]
async fn list_compatible_parts(
    State(state): State<ApiState>,
    Path((id, category)): Path<(String, PartCategory)>,
) -> Result<impl IntoResponse, ApiError> {
    let catalog = state.try_get_slice::<Catalog>()?;
    let frame = catalog.frame(&id)?;
    Ok(Json(catalog.compatible_parts(frame, category)))
}
