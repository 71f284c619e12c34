use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use crate::auth::{RequireAdmin, RequireUser};
use crate::server::AppState;
use crate::server::dto::{public_view, public_views};
use crate::server::response::{ApiError, ApiResponse, StoreOptionExt};
use crate::types::{MissionInput, MissionQuery};

pub fn missions_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/missions", get(list_missions).post(create_mission))
        .route(
            "/missions/{id}",
            get(get_mission).put(update_mission).delete(delete_mission),
        )
}

fn mission_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::bad_request("Mission id must be a positive integer"))
}

fn mission_body(body: Result<Json<MissionInput>, JsonRejection>) -> Result<MissionInput, ApiError> {
    body.map(|Json(input)| input)
        .map_err(|e| ApiError::bad_request(e.body_text()))
}

pub async fn list_missions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MissionQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let missions = state.store.list(&query);

    Ok::<_, ApiError>(Json(ApiResponse::success(public_views(&missions))))
}

pub async fn get_mission(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> impl IntoResponse {
    let id = mission_id(path)?;

    let mission = state.store.get(id).or_not_found("Mission not found")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(public_view(&mission))))
}

pub async fn create_mission(
    RequireUser(user): RequireUser,
    State(state): State<Arc<AppState>>,
    body: Result<Json<MissionInput>, JsonRejection>,
) -> impl IntoResponse {
    let mut input = mission_body(body)?;
    input.created_by = Some(user.id);
    input.created_at = Some(Utc::now());

    let mission = state.store.create(input)?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(ApiResponse::success(public_view(&mission))),
    ))
}

pub async fn update_mission(
    RequireUser(_user): RequireUser,
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<MissionInput>, JsonRejection>,
) -> impl IntoResponse {
    let id = mission_id(path)?;
    let patch = mission_body(body)?;

    let mission = state
        .store
        .update(id, patch)?
        .or_not_found("Mission not found")?;

    Ok::<_, ApiError>(Json(ApiResponse::success(public_view(&mission))))
}

pub async fn delete_mission(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> impl IntoResponse {
    let id = mission_id(path)?;

    state.store.delete(id)?;

    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
