use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::inventory::use_cases::list_assets::inbound::graphql::AssetsQuery;
use crate::modules::inventory::use_cases::list_departments::inbound::graphql::DepartmentsQuery;
use crate::modules::inventory::use_cases::list_movements::inbound::graphql::MovementsQuery;
use crate::modules::inventory::use_cases::record_movement::inbound::graphql::RecordMovementMutation;
use crate::modules::inventory::use_cases::register_asset::inbound::graphql::RegisterAssetMutation;
use crate::modules::inventory::use_cases::register_department::inbound::graphql::RegisterDepartmentMutation;
use crate::modules::inventory::use_cases::view_dashboard::inbound::graphql::DashboardQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(DashboardQuery, AssetsQuery, MovementsQuery, DepartmentsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RegisterAssetMutation, RecordMovementMutation, RegisterDepartmentMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
