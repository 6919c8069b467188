use crate::modules::inventory::adapters::outbound::inventory_store::InventoryStore;
use crate::modules::inventory::core::asset::Asset;
use crate::modules::inventory::use_cases::application_error::ApplicationError;
use crate::modules::inventory::use_cases::register_asset::command::RegisterAsset;
use crate::modules::inventory::use_cases::register_asset::decide::decide_register;
use crate::modules::inventory::use_cases::register_asset::decision::Decision;
use crate::shared::core::primitives::new_id;
use std::sync::Arc;
use tracing::info;

pub struct RegisterAssetHandler {
    store: Arc<InventoryStore>,
}

impl RegisterAssetHandler {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: RegisterAsset) -> Result<Asset, ApplicationError> {
        match decide_register(new_id(), command) {
            Decision::Accepted { asset } => {
                self.store.save_asset(asset.clone())?;
                info!(asset_id = %asset.id, tag = %asset.tag, "asset registered");
                Ok(asset)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
