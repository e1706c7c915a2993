use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Status {
    status: &'static str,
}

pub async fn status() -> Json<Status> {
    Json(Status { status: "ok" })
}
