use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::inventory::core::asset::{NFeKind, NFeRecord};
use crate::modules::inventory::use_cases::list_assets::inbound::graphql::GqlAsset;
use crate::modules::inventory::use_cases::register_asset::command::RegisterAsset;
use crate::shared::core::primitives::new_id;
use crate::shell::state::{AppState, run_blocking};

#[derive(InputObject)]
pub struct GqlNFeInput {
    pub id: Option<String>,
    pub number: String,
    pub kind: String,
    pub date: String,
    pub file_url: Option<String>,
}

#[derive(InputObject)]
pub struct GqlRegisterAssetInput {
    pub name: String,
    pub tag: String,
    pub category: String,
    pub status: String,
    pub department_id: String,
    pub purchase_date: String,
    pub purchase_value: f64,
    #[graphql(default)]
    pub description: String,
    #[graphql(default)]
    pub nfes: Vec<GqlNFeInput>,
}

fn parse_date(raw: &str) -> GqlResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| async_graphql::Error::new(format!("invalid date {raw:?}: {e}")))
}

impl TryFrom<GqlNFeInput> for NFeRecord {
    type Error = async_graphql::Error;

    fn try_from(input: GqlNFeInput) -> GqlResult<Self> {
        Ok(NFeRecord {
            id: input.id.unwrap_or_else(new_id),
            number: input.number,
            kind: input.kind.parse::<NFeKind>()?,
            date: parse_date(&input.date)?,
            file_url: input.file_url,
        })
    }
}

impl TryFrom<GqlRegisterAssetInput> for RegisterAsset {
    type Error = async_graphql::Error;

    fn try_from(input: GqlRegisterAssetInput) -> GqlResult<Self> {
        Ok(RegisterAsset {
            name: input.name,
            tag: input.tag,
            category: input.category.parse()?,
            status: input.status.parse()?,
            department_id: input.department_id,
            purchase_date: parse_date(&input.purchase_date)?,
            purchase_value: input.purchase_value,
            description: input.description,
            nfes: input
                .nfes
                .into_iter()
                .map(NFeRecord::try_from)
                .collect::<GqlResult<_>>()?,
        })
    }
}

#[derive(Default)]
pub struct RegisterAssetMutation;

#[Object]
impl RegisterAssetMutation {
    async fn register_asset(
        &self,
        context: &Context<'_>,
        input: GqlRegisterAssetInput,
    ) -> GqlResult<GqlAsset> {
        let state = context.data_unchecked::<AppState>();
        let command = RegisterAsset::try_from(input)?;

        let _writer = state.writer.lock().await;
        let handler = state.register_asset_handler.clone();
        let asset = run_blocking(move || handler.handle(command))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(asset.into())
    }
}
