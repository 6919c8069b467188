// Builders for stored records. Defaults are fixed so tests stay deterministic.

use crate::modules::inventory::core::asset::{
    Asset, AssetCategory, AssetStatus, NFeKind, NFeRecord,
};
use crate::modules::inventory::core::movement::Movement;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 15).unwrap()
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 2, 13, 45, 0).unwrap()
}

pub struct AssetBuilder {
    inner: Asset,
}

impl Default for AssetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AssetBuilder {
    pub fn new() -> Self {
        Self {
            inner: Asset {
                id: "asset-fixed-0001".to_string(),
                name: "Notebook Dell Latitude".to_string(),
                tag: "TI-100".to_string(),
                category: AssetCategory::It,
                status: AssetStatus::InOperation,
                department_id: "1".to_string(),
                purchase_date: Some(fixed_date()),
                purchase_value: 7200.0,
                description: "Notebook para o time de suporte.".to_string(),
                nfes: vec![NFeRecord {
                    id: "nf-fixed-0001".to_string(),
                    number: "98765".to_string(),
                    kind: NFeKind::Purchase,
                    date: fixed_date(),
                    file_url: None,
                }],
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
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

    pub fn build(self) -> Asset {
        self.inner
    }
}

pub struct MovementBuilder {
    inner: Movement,
}

impl Default for MovementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MovementBuilder {
    pub fn new() -> Self {
        Self {
            inner: Movement {
                id: "movement-fixed-0001".to_string(),
                asset_id: "a1".to_string(),
                from_department_id: "1".to_string(),
                to_department_id: "3".to_string(),
                date: fixed_timestamp(),
                reason: "Envio para reparo técnico".to_string(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn asset_id(mut self, v: impl Into<String>) -> Self {
        self.inner.asset_id = v.into();
        self
    }

    pub fn from(mut self, v: impl Into<String>) -> Self {
        self.inner.from_department_id = v.into();
        self
    }

    pub fn to(mut self, v: impl Into<String>) -> Self {
        self.inner.to_department_id = v.into();
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn build(self) -> Movement {
        self.inner
    }
}
