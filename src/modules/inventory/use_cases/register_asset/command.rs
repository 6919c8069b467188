use crate::modules::inventory::core::asset::{AssetCategory, AssetStatus, NFeRecord};
use chrono::NaiveDate;
use serde::Deserialize;

/// Every asset field except the id, which is assigned on registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAsset {
    pub name: String,
    pub tag: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub department_id: String,
    pub purchase_date: NaiveDate,
    pub purchase_value: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub nfes: Vec<NFeRecord>,
}
