use super::{ApiError, AppState};
use crate::velov::{Station, get_station};
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn station(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Station>, ApiError> {
    let Path(station_id) = path?;
    let station = get_station(state.client.as_ref(), station_id).await?;
    Ok(Json(station))
}
