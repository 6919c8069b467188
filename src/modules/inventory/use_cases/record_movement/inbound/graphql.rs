use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::inventory::core::asset::AssetStatus;
use crate::modules::inventory::core::movement::Movement;
use crate::modules::inventory::use_cases::record_movement::command::RecordMovement;
use crate::shell::state::{AppState, run_blocking};

#[derive(SimpleObject, Clone)]
pub struct GqlMovement {
    pub id: String,
    pub asset_id: String,
    pub from_department_id: String,
    pub to_department_id: String,
    pub date: String,
    pub reason: String,
}

impl From<Movement> for GqlMovement {
    fn from(v: Movement) -> Self {
        Self {
            id: v.id,
            asset_id: v.asset_id,
            from_department_id: v.from_department_id,
            to_department_id: v.to_department_id,
            date: v.date.to_rfc3339(),
            reason: v.reason,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlMovementRecorded {
    pub movement: GqlMovement,
    pub asset_updated: bool,
}

#[derive(Default)]
pub struct RecordMovementMutation;

#[Object]
impl RecordMovementMutation {
    async fn record_movement(
        &self,
        context: &Context<'_>,
        asset_id: String,
        to_department_id: String,
        status: Option<String>,
        #[graphql(default)] reason: String,
    ) -> GqlResult<GqlMovementRecorded> {
        let state = context.data_unchecked::<AppState>();
        let new_status = status.map(|s| s.parse::<AssetStatus>()).transpose()?;

        let command = RecordMovement {
            asset_id,
            to_department_id,
            new_status,
            reason,
            date: Utc::now(),
        };

        let _writer = state.writer.lock().await;
        let handler = state.record_movement_handler.clone();
        let recorded = run_blocking(move || handler.handle(command))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(GqlMovementRecorded {
            asset_updated: recorded.asset.is_some(),
            movement: recorded.movement.into(),
        })
    }
}
