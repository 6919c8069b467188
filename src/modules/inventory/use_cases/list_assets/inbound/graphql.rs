use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::inventory::core::asset::{Asset, NFeRecord};
use crate::modules::inventory::use_cases::list_assets::inbound::http::load_rows;
use crate::modules::inventory::use_cases::list_assets::projection::AssetRow;
use crate::shell::state::{AppState, run_blocking};

#[derive(SimpleObject, Clone)]
pub struct GqlNFe {
    pub id: String,
    pub number: String,
    pub kind: String,
    pub date: String,
    pub file_url: Option<String>,
}

impl From<NFeRecord> for GqlNFe {
    fn from(v: NFeRecord) -> Self {
        Self {
            id: v.id,
            number: v.number,
            kind: v.kind.label().to_string(),
            date: v.date.to_string(),
            file_url: v.file_url,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAsset {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub category: String,
    pub status: String,
    pub department_id: String,
    pub purchase_date: Option<String>,
    pub purchase_value: f64,
    pub description: String,
    pub nfes: Vec<GqlNFe>,
}

impl From<Asset> for GqlAsset {
    fn from(v: Asset) -> Self {
        Self {
            id: v.id,
            name: v.name,
            tag: v.tag,
            category: v.category.to_string(),
            status: v.status.to_string(),
            department_id: v.department_id,
            purchase_date: v.purchase_date.map(|date| date.to_string()),
            purchase_value: v.purchase_value,
            description: v.description,
            nfes: v.nfes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlAssetRow {
    pub asset: GqlAsset,
    pub department_name: String,
}

impl From<AssetRow> for GqlAssetRow {
    fn from(v: AssetRow) -> Self {
        Self {
            asset: v.asset.into(),
            department_name: v.department_name,
        }
    }
}

#[derive(Default)]
pub struct AssetsQuery;

#[Object]
impl AssetsQuery {
    async fn assets(
        &self,
        context: &Context<'_>,
        search: Option<String>,
    ) -> GqlResult<Vec<GqlAssetRow>> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.clone();
        let rows = run_blocking(move || Ok(load_rows(&store, search.as_deref())?))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
