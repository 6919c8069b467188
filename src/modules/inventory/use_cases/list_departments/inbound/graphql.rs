use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::inventory::core::department::Department;
use crate::shell::state::{AppState, run_blocking};

#[derive(SimpleObject, Clone)]
pub struct GqlDepartment {
    pub id: String,
    pub name: String,
    pub cost_center: String,
}

impl From<Department> for GqlDepartment {
    fn from(v: Department) -> Self {
        Self {
            id: v.id,
            name: v.name,
            cost_center: v.cost_center,
        }
    }
}

#[derive(Default)]
pub struct DepartmentsQuery;

#[Object]
impl DepartmentsQuery {
    async fn departments(&self, context: &Context<'_>) -> GqlResult<Vec<GqlDepartment>> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.clone();
        let departments = run_blocking(move || Ok(store.list_departments()?))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(departments.into_iter().map(Into::into).collect())
    }
}
