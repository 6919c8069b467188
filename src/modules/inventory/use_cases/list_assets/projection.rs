use crate::modules::inventory::core::asset::Asset;
use crate::modules::inventory::core::department::{Department, department_name};
use crate::modules::inventory::use_cases::view_dashboard::projection::UNKNOWN_DEPARTMENT;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow {
    #[serde(flatten)]
    pub asset: Asset,
    /// `UNKNOWN_DEPARTMENT` when the department id dangles.
    pub department_name: String,
}

/// Case-insensitive substring match on name or tag. A blank needle matches all.
pub fn matches_search(asset: &Asset, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty()
        || asset.name.to_lowercase().contains(&needle)
        || asset.tag.to_lowercase().contains(&needle)
}

pub fn project_asset_rows(
    assets: Vec<Asset>,
    departments: &[Department],
    search: Option<&str>,
) -> Vec<AssetRow> {
    assets
        .into_iter()
        .filter(|asset| search.is_none_or(|needle| matches_search(asset, needle)))
        .map(|asset| AssetRow {
            department_name: department_name(departments, &asset.department_id)
                .unwrap_or(UNKNOWN_DEPARTMENT)
                .to_string(),
            asset,
        })
        .collect()
}
