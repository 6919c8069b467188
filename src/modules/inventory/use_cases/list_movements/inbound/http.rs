use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::modules::inventory::adapters::outbound::inventory_store::{InventoryStore, StoreError};
use crate::modules::inventory::use_cases::list_movements::projection::{
    MovementHistoryEntry, project_history,
};
use crate::shell::state::{AppState, run_blocking};

pub(crate) fn load_history(
    store: &InventoryStore,
) -> Result<Vec<MovementHistoryEntry>, StoreError> {
    let movements = store.list_movements()?;
    let assets = store.list_assets()?;
    let departments = store.list_departments()?;
    Ok(project_history(movements, &assets, &departments))
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.clone();
    match run_blocking(move || Ok(load_history(&store)?)).await {
        Ok(history) => Json(history).into_response(),
        Err(error) => {
            error!(%error, "listing movements failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
