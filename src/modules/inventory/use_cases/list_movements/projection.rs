use crate::modules::inventory::core::asset::Asset;
use crate::modules::inventory::core::department::{Department, department_name};
use crate::modules::inventory::core::movement::Movement;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MISSING_ASSET: &str = "Excluído";
pub const MISSING_DEPARTMENT: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementHistoryEntry {
    pub id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub asset_tag: Option<String>,
    pub from_department_name: String,
    pub to_department_name: String,
    pub date: DateTime<Utc>,
    pub reason: String,
}

/// Movement ledger, most recent first, joined with current names.
pub fn project_history(
    movements: Vec<Movement>,
    assets: &[Asset],
    departments: &[Department],
) -> Vec<MovementHistoryEntry> {
    let department = |id: &str| {
        department_name(departments, id)
            .unwrap_or(MISSING_DEPARTMENT)
            .to_string()
    };
    movements
        .into_iter()
        .rev()
        .map(|movement| {
            let asset = assets.iter().find(|asset| asset.id == movement.asset_id);
            MovementHistoryEntry {
                asset_name: asset
                    .map(|asset| asset.name.clone())
                    .unwrap_or_else(|| MISSING_ASSET.to_string()),
                asset_tag: asset.map(|asset| asset.tag.clone()),
                from_department_name: department(&movement.from_department_id),
                to_department_name: department(&movement.to_department_id),
                id: movement.id,
                asset_id: movement.asset_id,
                date: movement.date,
                reason: movement.reason,
            }
        })
        .collect()
}
