use crate::modules::inventory::core::asset::{Asset, AssetStatus};
use crate::modules::inventory::core::movement::Movement;

/// Derive the asset state that follows a recorded movement.
///
/// The department always follows `movement.to_department_id`; the status is
/// replaced only when a new one was chosen. Every other field is kept.
pub fn relocate(asset: Asset, movement: &Movement, new_status: Option<AssetStatus>) -> Asset {
    Asset {
        department_id: movement.to_department_id.clone(),
        status: new_status.unwrap_or(asset.status),
        ..asset
    }
}
