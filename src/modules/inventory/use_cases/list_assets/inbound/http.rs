use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::error;

use crate::modules::inventory::adapters::outbound::inventory_store::{InventoryStore, StoreError};
use crate::modules::inventory::use_cases::list_assets::projection::{AssetRow, project_asset_rows};
use crate::shell::state::{AppState, run_blocking};

#[derive(Deserialize)]
pub struct ListAssetsParams {
    pub search: Option<String>,
}

pub(crate) fn load_rows(
    store: &InventoryStore,
    search: Option<&str>,
) -> Result<Vec<AssetRow>, StoreError> {
    let assets = store.list_assets()?;
    let departments = store.list_departments()?;
    Ok(project_asset_rows(assets, &departments, search))
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListAssetsParams>,
) -> impl IntoResponse {
    let store = state.store.clone();
    let search = params.search;
    match run_blocking(move || Ok(load_rows(&store, search.as_deref())?)).await {
        Ok(rows) => Json(rows).into_response(),
        Err(error) => {
            error!(%error, "listing assets failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
