use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::modules::inventory::adapters::outbound::inventory_store::{InventoryStore, StoreError};
use crate::modules::inventory::use_cases::view_dashboard::projection::{
    DashboardView, project_dashboard,
};
use crate::shell::state::{AppState, run_blocking};

pub(crate) fn load_dashboard(store: &InventoryStore) -> Result<DashboardView, StoreError> {
    let assets = store.list_assets()?;
    let departments = store.list_departments()?;
    Ok(project_dashboard(&assets, &departments))
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.clone();
    match run_blocking(move || Ok(load_dashboard(&store)?)).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => {
            error!(%error, "building dashboard failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
