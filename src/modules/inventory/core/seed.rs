// Default collections served when nothing has been persisted yet.

use crate::modules::inventory::core::asset::{
    Asset, AssetCategory, AssetStatus, NFeKind, NFeRecord,
};
use crate::modules::inventory::core::department::Department;
use crate::modules::inventory::core::movement::Movement;
use chrono::NaiveDate;

fn department(id: &str, name: &str, cost_center: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        cost_center: cost_center.to_string(),
    }
}

// Evaluated at compile time, so a mistyped literal fails the build.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const MACBOOK_PURCHASED: NaiveDate = date(2023, 11, 15);
const CHAIR_PURCHASED: NaiveDate = date(2024, 1, 10);

pub fn seed_departments() -> Vec<Department> {
    vec![
        department("1", "Tecnologia da Informação", "100.01"),
        department("2", "Recursos Humanos", "100.02"),
        department("3", "Operações / Logística", "200.05"),
        department("4", "Administrativo", "100.03"),
    ]
}

pub fn seed_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "a1".into(),
            name: "MacBook Pro M3".into(),
            tag: "TI-001".into(),
            category: AssetCategory::It,
            status: AssetStatus::InOperation,
            department_id: "1".into(),
            purchase_date: Some(MACBOOK_PURCHASED),
            purchase_value: 15000.0,
            description: "Equipamento de alta performance para desenvolvimento.".into(),
            nfes: vec![NFeRecord {
                id: "nf1".into(),
                number: "12345".into(),
                kind: NFeKind::Purchase,
                date: MACBOOK_PURCHASED,
                file_url: None,
            }],
        },
        Asset {
            id: "a2".into(),
            name: "Cadeira Ergonômica Herman Miller".into(),
            tag: "MOB-042".into(),
            category: AssetCategory::Furniture,
            status: AssetStatus::InStock,
            department_id: "4".into(),
            purchase_date: Some(CHAIR_PURCHASED),
            purchase_value: 8500.0,
            description: "Cadeira para diretoria.".into(),
            nfes: vec![],
        },
    ]
}

pub fn seed_movements() -> Vec<Movement> {
    Vec::new()
}
