use axum::{
    Extension, Router,
    routing::get,
};

use crate::modules::inventory::use_cases::list_assets::inbound::http as list_assets_http;
use crate::modules::inventory::use_cases::list_departments::inbound::http as list_departments_http;
use crate::modules::inventory::use_cases::list_movements::inbound::http as list_movements_http;
use crate::modules::inventory::use_cases::record_movement::inbound::http as record_movement_http;
use crate::modules::inventory::use_cases::register_asset::inbound::http as register_asset_http;
use crate::modules::inventory::use_cases::register_department::inbound::http as register_department_http;
use crate::modules::inventory::use_cases::view_dashboard::inbound::http as dashboard_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/dashboard", get(dashboard_http::handle))
        .route(
            "/assets",
            get(list_assets_http::handle).post(register_asset_http::handle),
        )
        .route(
            "/departments",
            get(list_departments_http::handle).post(register_department_http::handle),
        )
        .route(
            "/movements",
            get(list_movements_http::handle).post(record_movement_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
