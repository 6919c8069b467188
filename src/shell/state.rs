use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::inventory::adapters::outbound::inventory_store::InventoryStore;
use crate::modules::inventory::use_cases::application_error::ApplicationError;
use crate::modules::inventory::use_cases::record_movement::handler::RecordMovementHandler;
use crate::modules::inventory::use_cases::register_asset::handler::RegisterAssetHandler;
use crate::modules::inventory::use_cases::register_department::handler::RegisterDepartmentHandler;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InventoryStore>,
    pub register_asset_handler: Arc<RegisterAssetHandler>,
    pub register_department_handler: Arc<RegisterDepartmentHandler>,
    pub record_movement_handler: Arc<RecordMovementHandler>,
    /// Held for the duration of every mutation so there is one writer at a time.
    pub writer: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self {
            register_asset_handler: Arc::new(RegisterAssetHandler::new(store.clone())),
            register_department_handler: Arc::new(RegisterDepartmentHandler::new(store.clone())),
            record_movement_handler: Arc::new(RecordMovementHandler::new(store.clone())),
            store,
            writer: Arc::new(Mutex::new(())),
        }
    }
}

/// Runs synchronous store work on the blocking pool so file I/O never
/// stalls a runtime worker.
pub async fn run_blocking<T: Send + 'static>(
    work: impl FnOnce() -> Result<T, ApplicationError> + Send + 'static,
) -> Result<T, ApplicationError> {
    tokio::task::spawn_blocking(work).await?
}
