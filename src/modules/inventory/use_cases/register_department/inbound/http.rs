use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use crate::modules::inventory::adapters::outbound::inventory_store::StoreError;
use crate::modules::inventory::use_cases::application_error::ApplicationError;
use crate::modules::inventory::use_cases::register_department::command::RegisterDepartment;
use crate::shell::state::{AppState, run_blocking};

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterDepartment>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let _writer = state.writer.lock().await;
    let handler = state.register_department_handler.clone();
    match run_blocking(move || handler.handle(command)).await {
        Ok(department) => (StatusCode::CREATED, Json(department)).into_response(),
        Err(ApplicationError::Domain(reason)) => (StatusCode::BAD_REQUEST, reason).into_response(),
        Err(ApplicationError::Store(StoreError::DuplicateDepartment(id))) => {
            (StatusCode::CONFLICT, format!("department {id} already exists")).into_response()
        }
        Err(error) => {
            error!(%error, "department registration failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
