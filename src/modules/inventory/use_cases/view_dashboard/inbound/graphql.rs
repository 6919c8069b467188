use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::inventory::use_cases::view_dashboard::inbound::http::load_dashboard;
use crate::modules::inventory::use_cases::view_dashboard::projection::{
    CategoryCount, DashboardView, RecentAsset, StatusCount,
};
use crate::shell::state::{AppState, run_blocking};

#[derive(SimpleObject, Clone)]
pub struct GqlStatusCount {
    pub status: String,
    pub count: i64,
}

impl From<StatusCount> for GqlStatusCount {
    fn from(v: StatusCount) -> Self {
        Self {
            status: v.status.to_string(),
            count: v.count as i64,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlCategoryCount {
    pub category: String,
    pub count: i64,
}

impl From<CategoryCount> for GqlCategoryCount {
    fn from(v: CategoryCount) -> Self {
        Self {
            category: v.category.to_string(),
            count: v.count as i64,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRecentAsset {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub status: String,
    pub department_name: String,
    pub purchase_value: f64,
}

impl From<RecentAsset> for GqlRecentAsset {
    fn from(v: RecentAsset) -> Self {
        Self {
            id: v.id,
            name: v.name,
            tag: v.tag,
            status: v.status.to_string(),
            department_name: v.department_name,
            purchase_value: v.purchase_value,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboard {
    pub total_assets: i64,
    pub total_value: f64,
    pub under_repair: i64,
    pub total_departments: i64,
    pub by_status: Vec<GqlStatusCount>,
    pub by_category: Vec<GqlCategoryCount>,
    pub recently_added: Vec<GqlRecentAsset>,
}

impl From<DashboardView> for GqlDashboard {
    fn from(v: DashboardView) -> Self {
        Self {
            total_assets: v.total_assets as i64,
            total_value: v.total_value,
            under_repair: v.under_repair as i64,
            total_departments: v.total_departments as i64,
            by_status: v.by_status.into_iter().map(Into::into).collect(),
            by_category: v.by_category.into_iter().map(Into::into).collect(),
            recently_added: v.recently_added.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    async fn dashboard(&self, context: &Context<'_>) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.clone();
        let view = run_blocking(move || Ok(load_dashboard(&store)?))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
