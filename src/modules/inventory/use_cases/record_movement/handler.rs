use crate::modules::inventory::adapters::outbound::inventory_store::InventoryStore;
use crate::modules::inventory::core::asset::Asset;
use crate::modules::inventory::core::movement::Movement;
use crate::modules::inventory::core::relocate::relocate;
use crate::modules::inventory::use_cases::application_error::ApplicationError;
use crate::modules::inventory::use_cases::record_movement::command::RecordMovement;
use crate::shared::core::primitives::new_id;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct MovementRecorded {
    pub movement: Movement,
    /// The asset after the cascade, `None` when the movement named an
    /// unknown asset and only the ledger entry was written.
    pub asset: Option<Asset>,
}

pub struct RecordMovementHandler {
    store: Arc<InventoryStore>,
}

impl RecordMovementHandler {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    /// Append the movement, then move the asset.
    ///
    /// The two writes are separate and there is no rollback: if the asset
    /// write fails the ledger already holds the movement.
    pub fn handle(&self, command: RecordMovement) -> Result<MovementRecorded, ApplicationError> {
        let asset = self.store.find_asset(&command.asset_id)?;

        let movement = Movement {
            id: new_id(),
            asset_id: command.asset_id,
            from_department_id: asset
                .as_ref()
                .map(|asset| asset.department_id.clone())
                .unwrap_or_default(),
            to_department_id: command.to_department_id,
            date: command.date,
            reason: command.reason,
        };
        self.store.save_movement(movement.clone())?;

        let Some(asset) = asset else {
            warn!(
                movement_id = %movement.id,
                asset_id = %movement.asset_id,
                "movement recorded for unknown asset, nothing relocated"
            );
            return Ok(MovementRecorded {
                movement,
                asset: None,
            });
        };

        let relocated = relocate(asset, &movement, command.new_status);
        self.store.save_asset(relocated.clone())?;
        info!(
            movement_id = %movement.id,
            asset_id = %relocated.id,
            from = %movement.from_department_id,
            to = %movement.to_department_id,
            status = %relocated.status,
            "movement recorded"
        );

        Ok(MovementRecorded {
            movement,
            asset: Some(relocated),
        })
    }
}
