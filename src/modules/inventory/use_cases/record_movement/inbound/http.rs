use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::inventory::core::asset::AssetStatus;
use crate::modules::inventory::core::movement::Movement;
use crate::modules::inventory::use_cases::record_movement::command::RecordMovement;
use crate::shell::state::{AppState, run_blocking};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMovementBody {
    pub asset_id: String,
    pub to_department_id: String,
    #[serde(default)]
    pub status: Option<AssetStatus>,
    #[serde(default)]
    pub reason: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMovementResponse {
    pub movement: Movement,
    pub asset_updated: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordMovementBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordMovement {
        asset_id: body.asset_id,
        to_department_id: body.to_department_id,
        new_status: body.status,
        reason: body.reason,
        date: Utc::now(),
    };

    let _writer = state.writer.lock().await;
    let handler = state.record_movement_handler.clone();
    match run_blocking(move || handler.handle(command)).await {
        Ok(recorded) => (
            StatusCode::CREATED,
            Json(RecordMovementResponse {
                asset_updated: recorded.asset.is_some(),
                movement: recorded.movement,
            }),
        )
            .into_response(),
        Err(error) => {
            error!(%error, "recording movement failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
