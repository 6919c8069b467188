use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::shell::state::{AppState, run_blocking};

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.clone();
    match run_blocking(move || Ok(store.list_departments()?)).await {
        Ok(departments) => Json(departments).into_response(),
        Err(error) => {
            error!(%error, "listing departments failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
