// Dashboard read model. Every function is a pure reduction over the full
// collections and is recomputed on each request.

use crate::modules::inventory::core::asset::{Asset, AssetCategory, AssetStatus};
use crate::modules::inventory::core::department::{Department, department_name};
use serde::Serialize;

pub const RECENT_LIMIT: usize = 5;
pub const UNKNOWN_DEPARTMENT: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: AssetStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: AssetCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAsset {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub status: AssetStatus,
    pub department_name: String,
    pub purchase_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_assets: usize,
    pub total_value: f64,
    pub under_repair: usize,
    pub total_departments: usize,
    pub by_status: Vec<StatusCount>,
    pub by_category: Vec<CategoryCount>,
    pub recently_added: Vec<RecentAsset>,
}

pub fn total_value(assets: &[Asset]) -> f64 {
    assets.iter().map(|asset| asset.purchase_value).sum()
}

pub fn count_with_status(assets: &[Asset], status: AssetStatus) -> usize {
    assets.iter().filter(|asset| asset.status == status).count()
}

/// One entry per status, zero counts included, in declaration order.
pub fn count_by_status(assets: &[Asset]) -> Vec<StatusCount> {
    AssetStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: count_with_status(assets, status),
        })
        .collect()
}

/// Only categories that occur, ordered by first appearance.
pub fn count_by_category(assets: &[Asset]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for asset in assets {
        match counts.iter_mut().find(|c| c.category == asset.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: asset.category,
                count: 1,
            }),
        }
    }
    counts
}

/// The last `limit` assets in insertion order, newest first.
pub fn recently_added(assets: &[Asset], limit: usize) -> impl Iterator<Item = &Asset> {
    assets.iter().rev().take(limit)
}

pub fn project_dashboard(assets: &[Asset], departments: &[Department]) -> DashboardView {
    DashboardView {
        total_assets: assets.len(),
        total_value: total_value(assets),
        under_repair: count_with_status(assets, AssetStatus::UnderRepair),
        total_departments: departments.len(),
        by_status: count_by_status(assets),
        by_category: count_by_category(assets),
        recently_added: recently_added(assets, RECENT_LIMIT)
            .map(|asset| RecentAsset {
                id: asset.id.clone(),
                name: asset.name.clone(),
                tag: asset.tag.clone(),
                status: asset.status,
                department_name: department_name(departments, &asset.department_id)
                    .unwrap_or(UNKNOWN_DEPARTMENT)
                    .to_string(),
                purchase_value: asset.purchase_value,
            })
            .collect(),
    }
}
