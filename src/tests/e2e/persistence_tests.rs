use rstest::rstest;
use std::sync::Arc;

use crate::modules::inventory::adapters::outbound::inventory_store::InventoryStore;
use crate::modules::inventory::core::asset::AssetStatus;
use crate::modules::inventory::core::department::Department;
use crate::modules::inventory::use_cases::record_movement::handler::RecordMovementHandler;
use crate::shared::infrastructure::key_value_store::json_file::JsonFileKeyValueStore;
use crate::tests::fixtures::assets::AssetBuilder;
use crate::tests::fixtures::commands::record_movement::RecordMovementBuilder;

fn open_store(dir: &std::path::Path) -> Arc<InventoryStore> {
    Arc::new(InventoryStore::new(Arc::new(
        JsonFileKeyValueStore::open(dir).unwrap(),
    )))
}

#[rstest]
fn it_should_keep_all_collections_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    let first = open_store(dir.path());
    first
        .save_asset(
            AssetBuilder::new()
                .id("b1")
                .name("Empilhadeira Elétrica")
                .purchase_value(-12.5)
                .build(),
        )
        .unwrap();
    first
        .save_department(Department {
            id: "5".to_string(),
            name: "Jurídico".to_string(),
            cost_center: "100.09".to_string(),
        })
        .unwrap();
    RecordMovementHandler::new(first.clone())
        .handle(
            RecordMovementBuilder::new()
                .asset_id("b1")
                .to("5")
                .new_status(Some(AssetStatus::Disused))
                .build(),
        )
        .unwrap();

    let second = open_store(dir.path());

    assert_eq!(second.list_assets().unwrap(), first.list_assets().unwrap());
    assert_eq!(
        second.list_departments().unwrap(),
        first.list_departments().unwrap()
    );
    assert_eq!(
        second.list_movements().unwrap(),
        first.list_movements().unwrap()
    );

    let moved = second.find_asset("b1").unwrap().unwrap();
    assert_eq!(moved.department_id, "5");
    assert_eq!(moved.status, AssetStatus::Disused);
    assert_eq!(moved.purchase_value, -12.5);
    assert_eq!(second.list_assets().unwrap().len(), 3);
}

#[rstest]
fn it_should_write_display_labels_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    store.save_asset(AssetBuilder::new().id("b2").build()).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("assets.json")).unwrap();

    assert!(raw.contains("\"Em Operação\""));
    assert!(raw.contains("\"TI / Informática\""));
    assert!(raw.contains("\"departmentId\""));
    assert!(raw.contains("\"purchaseDate\":\"2023-11-15\""));
}

#[rstest]
fn it_should_fall_back_to_seed_when_a_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("departments.json"), "{not json").unwrap();

    let departments = open_store(dir.path()).list_departments().unwrap();

    assert_eq!(departments.len(), 4);
    assert_eq!(departments[0].name, "Tecnologia da Informação");
}
