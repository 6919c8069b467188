use crate::modules::inventory::adapters::outbound::inventory_store::InventoryStore;
use crate::modules::inventory::core::department::Department;
use crate::modules::inventory::use_cases::application_error::ApplicationError;
use crate::modules::inventory::use_cases::register_department::command::RegisterDepartment;
use crate::modules::inventory::use_cases::register_department::decide::decide_register;
use crate::shared::core::primitives::new_id;
use std::sync::Arc;
use tracing::info;

pub struct RegisterDepartmentHandler {
    store: Arc<InventoryStore>,
}

impl RegisterDepartmentHandler {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: RegisterDepartment) -> Result<Department, ApplicationError> {
        let department = decide_register(new_id(), command)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        self.store.save_department(department.clone())?;
        info!(
            department_id = %department.id,
            cost_center = %department.cost_center,
            "department registered"
        );
        Ok(department)
    }
}
