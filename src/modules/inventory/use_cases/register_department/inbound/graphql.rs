use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::inventory::use_cases::list_departments::inbound::graphql::GqlDepartment;
use crate::modules::inventory::use_cases::register_department::command::RegisterDepartment;
use crate::shell::state::{AppState, run_blocking};

#[derive(Default)]
pub struct RegisterDepartmentMutation;

#[Object]
impl RegisterDepartmentMutation {
    async fn register_department(
        &self,
        context: &Context<'_>,
        name: String,
        cost_center: String,
    ) -> GqlResult<GqlDepartment> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterDepartment { name, cost_center };

        let _writer = state.writer.lock().await;
        let handler = state.register_department_handler.clone();
        let department = run_blocking(move || handler.handle(command))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(department.into())
    }
}
