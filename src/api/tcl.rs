use super::{ApiError, AppState};
use crate::tcl::{Passages, get_passages};
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn stop(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Passages>, ApiError> {
    let Path(stop_id) = path?;
    let passages = get_passages(
        state.client.as_ref(),
        &state.tcl,
        state.clock.as_ref(),
        stop_id,
    )
    .await?;
    Ok(Json(passages))
}
