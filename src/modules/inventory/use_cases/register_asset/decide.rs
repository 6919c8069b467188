use crate::modules::inventory::core::asset::Asset;
use crate::modules::inventory::use_cases::register_asset::command::RegisterAsset;
use crate::modules::inventory::use_cases::register_asset::decision::{DecideError, Decision};

/// Build the asset to store under `asset_id`.
///
/// Negative purchase values pass; NaN and infinities are refused because the
/// persisted JSON cannot hold them.
pub fn decide_register(asset_id: String, command: RegisterAsset) -> Decision {
    if command.name.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyName,
        };
    }
    if command.tag.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyTag,
        };
    }
    if !command.purchase_value.is_finite() {
        return Decision::Rejected {
            reason: DecideError::NonFiniteValue,
        };
    }
    Decision::Accepted {
        asset: Asset {
            id: asset_id,
            name: command.name,
            tag: command.tag,
            category: command.category,
            status: command.status,
            department_id: command.department_id,
            purchase_date: Some(command.purchase_date),
            purchase_value: command.purchase_value,
            description: command.description,
            nfes: command.nfes,
        },
    }
}
