use rstest::{fixture, rstest};
use std::sync::Arc;

use crate::modules::inventory::adapters::outbound::inventory_store::InventoryStore;
use crate::modules::inventory::core::asset::AssetStatus;
use crate::modules::inventory::use_cases::record_movement::handler::RecordMovementHandler;
use crate::modules::inventory::use_cases::register_asset::handler::RegisterAssetHandler;
use crate::modules::inventory::use_cases::view_dashboard::projection::{
    count_by_status, project_dashboard,
};
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::tests::fixtures::commands::record_movement::RecordMovementBuilder;
use crate::tests::fixtures::commands::register_asset::RegisterAssetBuilder;

type BeforeEachReturn = (Arc<InventoryStore>, RecordMovementHandler);

#[fixture]
fn before_each() -> BeforeEachReturn {
    let store = Arc::new(InventoryStore::new(Arc::new(InMemoryKeyValueStore::new())));
    let handler = RecordMovementHandler::new(store.clone());
    (store, handler)
}

#[rstest]
fn it_should_move_a1_to_operations_under_repair(before_each: BeforeEachReturn) {
    let (store, handler) = before_each;
    let a2_before = store.find_asset("a2").unwrap().unwrap();
    assert!(store.list_movements().unwrap().is_empty());

    handler
        .handle(
            RecordMovementBuilder::new()
                .asset_id("a1")
                .to("3")
                .new_status(Some(AssetStatus::UnderRepair))
                .build(),
        )
        .unwrap();

    let movements = store.list_movements().unwrap();
    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].from_department_id, "1");
    assert_eq!(movements[0].to_department_id, "3");

    let a1 = store.find_asset("a1").unwrap().unwrap();
    assert_eq!(a1.department_id, "3");
    assert_eq!(a1.status, AssetStatus::UnderRepair);
    assert_eq!(store.find_asset("a2").unwrap().unwrap(), a2_before);
    assert_eq!(store.list_assets().unwrap().len(), 2);

    let dashboard = project_dashboard(
        &store.list_assets().unwrap(),
        &store.list_departments().unwrap(),
    );
    assert_eq!(dashboard.under_repair, 1);
}

#[rstest]
fn it_should_append_an_orphan_movement_and_leave_assets_alone(before_each: BeforeEachReturn) {
    let (store, handler) = before_each;
    let assets_before = store.list_assets().unwrap();

    let recorded = handler
        .handle(RecordMovementBuilder::new().asset_id("ghost").to("2").build())
        .unwrap();

    assert!(recorded.asset.is_none());
    assert_eq!(recorded.movement.from_department_id, "");
    assert_eq!(store.list_movements().unwrap().len(), 1);
    assert_eq!(store.list_assets().unwrap(), assets_before);
}

#[rstest]
fn it_should_count_statuses_after_registrations_and_moves(before_each: BeforeEachReturn) {
    let (store, handler) = before_each;
    let register = RegisterAssetHandler::new(store.clone());

    let mut ids = Vec::new();
    for tag in ["EST-1", "EST-2", "EST-3", "EST-4"] {
        let asset = register
            .handle(
                RegisterAssetBuilder::new()
                    .tag(tag)
                    .status(AssetStatus::InStock)
                    .build(),
            )
            .unwrap();
        ids.push(asset.id);
    }
    handler
        .handle(
            RecordMovementBuilder::new()
                .asset_id(ids[3].clone())
                .to("2")
                .new_status(Some(AssetStatus::UnderRepair))
                .build(),
        )
        .unwrap();

    let registered: Vec<_> = store
        .list_assets()
        .unwrap()
        .into_iter()
        .filter(|asset| ids.contains(&asset.id))
        .collect();
    let counts = count_by_status(&registered);

    assert_eq!(counts.len(), 5);
    let count_of = |status| counts.iter().find(|c| c.status == status).unwrap().count;
    assert_eq!(count_of(AssetStatus::InStock), 3);
    assert_eq!(count_of(AssetStatus::UnderRepair), 1);
    assert_eq!(count_of(AssetStatus::InOperation), 0);
    assert_eq!(count_of(AssetStatus::Disused), 0);
    assert_eq!(count_of(AssetStatus::ForReplacement), 0);
}
