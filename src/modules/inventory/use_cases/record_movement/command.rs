use crate::modules::inventory::core::asset::AssetStatus;
use chrono::{DateTime, Utc};

/// Transfer an asset and optionally change its status.
///
/// The origin department is not part of the command: it is read from the
/// asset at the moment the movement is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMovement {
    pub asset_id: String,
    pub to_department_id: String,
    pub new_status: Option<AssetStatus>,
    pub reason: String,
    pub date: DateTime<Utc>,
}
