use gardens::host::Target;
use log::Level;

use crate::testing::{at, logged, GardenTestScenario};

mod testing;

#[test]
fn test_garden_cells_are_appended_to_base_cells() {
    let scenario = GardenTestScenario::new()
        .given_region([6, 6], &["Potato"])
        .given_garden("garden", vec![at(0, 0), at(1, 0)])
        .given_growing_zone("fields", vec![at(4, 4)], "Rice");

    let cells = scenario.work_cells(vec![at(5, 5)]);

    assert_eq!(cells, vec![at(5, 5), at(0, 0), at(1, 0)]);
}

#[test]
fn test_cells_under_blocking_buildings_are_skipped() {
    let scenario = GardenTestScenario::new()
        .given_region([6, 6], &["Potato"])
        .given_garden("garden", vec![at(0, 0), at(1, 0), at(2, 0)])
        .given_thing("Wall", at(1, 0))
        .given_thing("Lamp", at(2, 0));

    let cells = scenario.work_cells(vec![]);

    assert_eq!(cells, vec![at(0, 0), at(2, 0)]);
}

#[test]
fn test_burning_garden_is_skipped() {
    let scenario = GardenTestScenario::new()
        .given_region([6, 6], &["Potato"])
        .given_garden("burning", vec![at(0, 0), at(1, 0)])
        .given_garden("calm", vec![at(0, 3)])
        .given_fire(at(1, 0));

    let cells = scenario.work_cells(vec![]);

    assert_eq!(cells, vec![at(0, 3)]);
}

#[test]
fn test_unreachable_garden_is_skipped() {
    let scenario = GardenTestScenario::new()
        .given_region([6, 6], &["Potato"])
        .given_garden("far", vec![at(5, 5), at(4, 5)])
        .given_garden("near", vec![at(0, 0)])
        .given_worker(|worker, _| {
            worker.unreachable.insert(Target::Tile(at(5, 5)));
        });

    let cells = scenario.work_cells(vec![]);

    assert_eq!(cells, vec![at(0, 0)]);
}

#[test]
fn test_garden_without_cells_is_reported_once_and_skipped() {
    let scenario = GardenTestScenario::new()
        .given_region([6, 6], &["Potato"])
        .given_garden("empty", vec![at(0, 0), at(1, 0)])
        .given_garden("garden", vec![at(3, 3)])
        .given_action(|gardens, region, zones| {
            gardens
                .remove_cells(region, zones["empty"], vec![at(0, 0), at(1, 0)])
                .unwrap();
        });
    let empty = scenario.zone("empty");
    let is_reported = |scenario: &GardenTestScenario| {
        scenario
            .gardens
            .get_region(scenario.region)
            .unwrap()
            .zoning
            .get_zone(empty)
            .unwrap()
            .empty_reported()
    };
    let reports = || {
        logged(Level::Error)
            .iter()
            .filter(|message| message.contains("has no cells"))
            .count()
    };
    let before = reports();
    assert!(!is_reported(&scenario));

    assert_eq!(scenario.work_cells(vec![]), vec![at(3, 3)]);
    assert!(is_reported(&scenario));
    assert_eq!(scenario.work_cells(vec![at(2, 2)]), vec![at(2, 2), at(3, 3)]);
    assert!(is_reported(&scenario));
    assert_eq!(scenario.work_cells(vec![]), vec![at(3, 3)]);

    assert_eq!(reports() - before, 1);
}

#[test]
fn test_enumeration_is_lazy_and_restartable() {
    let scenario = GardenTestScenario::new()
        .given_region([6, 6], &["Potato"])
        .given_garden("garden", vec![at(0, 0), at(1, 0), at(2, 0)]);

    let base: Vec<[usize; 2]> = vec![];
    let first: Vec<_> = scenario
        .gardens
        .potential_work_cells(scenario.region, base, &scenario.worker, &scenario.world)
        .unwrap()
        .take(2)
        .collect();

    assert_eq!(first, vec![at(0, 0), at(1, 0)]);
    assert_eq!(scenario.work_cells(vec![]), vec![at(0, 0), at(1, 0), at(2, 0)]);
}
