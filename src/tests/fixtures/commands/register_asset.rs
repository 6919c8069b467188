// Shared test fixture for the RegisterAsset command, parsed from the same
// JSON shape the HTTP endpoint accepts.

use crate::modules::inventory::core::asset::{AssetCategory, AssetStatus};
use crate::modules::inventory::use_cases::register_asset::command::RegisterAsset;

pub const REGISTER_ASSET_JSON: &str = include_str!("json/register_asset.json");

pub struct RegisterAssetBuilder {
    inner: RegisterAsset,
}

impl Default for RegisterAssetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterAssetBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(REGISTER_ASSET_JSON).unwrap(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn tag(mut self, v: impl Into<String>) -> Self {
        self.inner.tag = v.into();
        self
    }

    pub fn category(mut self, v: AssetCategory) -> Self {
        self.inner.category = v;
        self
    }

    pub fn status(mut self, v: AssetStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn department_id(mut self, v: impl Into<String>) -> Self {
        self.inner.department_id = v.into();
        self
    }

    pub fn purchase_value(mut self, v: f64) -> Self {
        self.inner.purchase_value = v;
        self
    }

    pub fn build(self) -> RegisterAsset {
        self.inner
    }
}

#[cfg(test)]
mod register_asset_builder_tests {
    use super::*;
    use crate::modules::inventory::core::asset::NFeKind;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterAssetBuilder::default().build();
        assert_eq!(built.name, "Monitor LG UltraWide 34");
        assert_eq!(built.tag, "TI-002");
        assert_eq!(built.category, AssetCategory::It);
        assert_eq!(built.status, AssetStatus::InStock);
        assert_eq!(built.purchase_date.to_string(), "2024-03-18");
        assert_eq!(built.nfes.len(), 1);
        assert_eq!(built.nfes[0].kind, NFeKind::Purchase);
    }

    #[rstest]
    fn setters_override_fields() {
        let custom = RegisterAssetBuilder::new()
            .name("Furadeira")
            .tag("FER-9")
            .category(AssetCategory::Tools)
            .status(AssetStatus::Disused)
            .department_id("3")
            .purchase_value(10.5)
            .build();
        assert_eq!(custom.name, "Furadeira");
        assert_eq!(custom.tag, "FER-9");
        assert_eq!(custom.category, AssetCategory::Tools);
        assert_eq!(custom.status, AssetStatus::Disused);
        assert_eq!(custom.department_id, "3");
        assert_eq!(custom.purchase_value, 10.5);
    }
}
