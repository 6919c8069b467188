use crate::modules::inventory::core::asset::AssetStatus;
use crate::modules::inventory::use_cases::record_movement::command::RecordMovement;
use crate::tests::fixtures::assets::fixed_timestamp;

pub struct RecordMovementBuilder {
    inner: RecordMovement,
}

impl Default for RecordMovementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordMovementBuilder {
    pub fn new() -> Self {
        Self {
            inner: RecordMovement {
                asset_id: "a1".to_string(),
                to_department_id: "3".to_string(),
                new_status: None,
                reason: "Mudança de setor".to_string(),
                date: fixed_timestamp(),
            },
        }
    }

    pub fn asset_id(mut self, v: impl Into<String>) -> Self {
        self.inner.asset_id = v.into();
        self
    }

    pub fn to(mut self, v: impl Into<String>) -> Self {
        self.inner.to_department_id = v.into();
        self
    }

    pub fn new_status(mut self, v: Option<AssetStatus>) -> Self {
        self.inner.new_status = v;
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn build(self) -> RecordMovement {
        self.inner
    }
}
