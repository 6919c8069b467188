use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::inventory::use_cases::list_movements::inbound::http::load_history;
use crate::modules::inventory::use_cases::list_movements::projection::MovementHistoryEntry;
use crate::shell::state::{AppState, run_blocking};

#[derive(SimpleObject, Clone)]
pub struct GqlMovementEntry {
    pub id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub asset_tag: Option<String>,
    pub from_department_name: String,
    pub to_department_name: String,
    pub date: String,
    pub reason: String,
}

impl From<MovementHistoryEntry> for GqlMovementEntry {
    fn from(v: MovementHistoryEntry) -> Self {
        Self {
            id: v.id,
            asset_id: v.asset_id,
            asset_name: v.asset_name,
            asset_tag: v.asset_tag,
            from_department_name: v.from_department_name,
            to_department_name: v.to_department_name,
            date: v.date.to_rfc3339(),
            reason: v.reason,
        }
    }
}

#[derive(Default)]
pub struct MovementsQuery;

#[Object]
impl MovementsQuery {
    async fn movements(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMovementEntry>> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.clone();
        let history = run_blocking(move || Ok(load_history(&store)?))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(history.into_iter().map(Into::into).collect())
    }
}
