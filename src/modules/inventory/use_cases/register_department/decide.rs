use crate::modules::inventory::core::department::Department;
use crate::modules::inventory::use_cases::register_department::command::RegisterDepartment;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("department name must not be empty")]
    EmptyName,
}

pub fn decide_register(
    department_id: String,
    command: RegisterDepartment,
) -> Result<Department, DecideError> {
    if command.name.trim().is_empty() {
        return Err(DecideError::EmptyName);
    }
    Ok(Department {
        id: department_id,
        name: command.name,
        cost_center: command.cost_center,
    })
}
