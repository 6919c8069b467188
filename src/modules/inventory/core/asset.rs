use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("unknown asset status: {0}")]
    Status(String),

    #[error("unknown asset category: {0}")]
    Category(String),

    #[error("unknown invoice type: {0}")]
    NFeKind(String),
}

/// Operational state of an asset. Serialized as the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    #[serde(rename = "Em Operação")]
    InOperation,
    #[serde(rename = "Em Estoque")]
    InStock,
    #[serde(rename = "Em Reparo")]
    UnderRepair,
    #[serde(rename = "Desuso")]
    Disused,
    #[serde(rename = "Para Substituição")]
    ForReplacement,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 5] = [
        AssetStatus::InOperation,
        AssetStatus::InStock,
        AssetStatus::UnderRepair,
        AssetStatus::Disused,
        AssetStatus::ForReplacement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::InOperation => "Em Operação",
            AssetStatus::InStock => "Em Estoque",
            AssetStatus::UnderRepair => "Em Reparo",
            AssetStatus::Disused => "Desuso",
            AssetStatus::ForReplacement => "Para Substituição",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetStatus {
    type Err = ParseEnumError;

    // Accepts the display label as well as the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AssetStatus::ALL
            .into_iter()
            .find(|status| status.label() == s || format!("{status:?}").eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::Status(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    #[serde(rename = "TI / Informática")]
    It,
    #[serde(rename = "Mobiliário")]
    Furniture,
    #[serde(rename = "Veículo")]
    Vehicle,
    #[serde(rename = "Maquinário")]
    Machinery,
    #[serde(rename = "Ferramentas")]
    Tools,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::It,
        AssetCategory::Furniture,
        AssetCategory::Vehicle,
        AssetCategory::Machinery,
        AssetCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetCategory::It => "TI / Informática",
            AssetCategory::Furniture => "Mobiliário",
            AssetCategory::Vehicle => "Veículo",
            AssetCategory::Machinery => "Maquinário",
            AssetCategory::Tools => "Ferramentas",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AssetCategory::ALL
            .into_iter()
            .find(|category| {
                category.label() == s || format!("{category:?}").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ParseEnumError::Category(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NFeKind {
    #[serde(rename = "Compra")]
    Purchase,
    #[serde(rename = "Movimentação")]
    Movement,
    #[serde(rename = "Descarte")]
    Disposal,
}

impl NFeKind {
    pub const ALL: [NFeKind; 3] = [NFeKind::Purchase, NFeKind::Movement, NFeKind::Disposal];

    pub fn label(self) -> &'static str {
        match self {
            NFeKind::Purchase => "Compra",
            NFeKind::Movement => "Movimentação",
            NFeKind::Disposal => "Descarte",
        }
    }
}

impl FromStr for NFeKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NFeKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s || format!("{kind:?}").eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::NFeKind(s.to_string()))
    }
}

/// Fiscal invoice attached to an asset. Has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NFeRecord {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub kind: NFeKind,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// A tracked physical item.
///
/// `department_id` is the denormalised current location; the movement log
/// records how it got there and must be kept in sync by every writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    /// Human-facing asset code, not unique.
    pub tag: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub department_id: String,
    /// Stored as `""` when the date was never filled in.
    #[serde(default, with = "blank_date")]
    pub purchase_date: Option<NaiveDate>,
    /// NaN when no value was entered. serde_json writes non-finite floats
    /// as `null`, so `null` is read back as NaN.
    #[serde(deserialize_with = "nan_when_null")]
    pub purchase_value: f64,
    pub description: String,
    #[serde(default)]
    pub nfes: Vec<NFeRecord>,
}

fn nan_when_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

mod blank_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw.trim(), FORMAT)
                .map(Some)
                .map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}
