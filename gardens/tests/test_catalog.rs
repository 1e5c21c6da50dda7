use gardens::cultivation::{fingerprint, EligibilitySet, FINGERPRINT_SEED};
use gardens::model::Settings;
use gardens::zoning::{ZoningError, Zoning};
use gardens::GardensError;

use crate::testing::{at, knowledge, GardenTestScenario};

mod testing;

fn names(eligible: &EligibilitySet) -> Vec<&str> {
    eligible
        .plants
        .iter()
        .map(|plant| plant.name.as_str())
        .collect()
}

#[test]
fn test_all_plants_are_eligible_in_definition_order() {
    let eligible = EligibilitySet::compute(&knowledge(), true);

    assert_eq!(
        names(&eligible),
        vec!["Potato", "Rice", "Corn", "Healroot", "Oak", "Grass"]
    );
    assert_eq!(eligible.fingerprint, fingerprint(names(&eligible)));
}

#[test]
fn test_plants_sowable_without_skill_are_restricted() {
    let eligible = EligibilitySet::compute(&knowledge(), false);

    assert_eq!(names(&eligible), vec!["Healroot"]);
}

#[test]
fn test_fingerprint_is_stable() {
    let known = knowledge();
    let first = EligibilitySet::compute(&known, true);
    let second = EligibilitySet::compute(&known, true);

    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(fingerprint(Vec::<&str>::new()), FINGERPRINT_SEED);
}

#[test]
fn test_fingerprint_changes_when_plant_appended() {
    let before = fingerprint(["Potato", "Rice"]);
    let after = fingerprint(["Potato", "Rice", "Corn"]);
    let reordered = fingerprint(["Rice", "Potato"]);

    assert_ne!(before, after);
    assert_ne!(before, reordered);
}

#[test]
fn test_only_eligible_plants_may_be_allowed() {
    let settings = Settings {
        allow_all_plants: false,
        ..Settings::default()
    };
    let mut scenario = GardenTestScenario::with_settings(settings)
        .given_region([4, 4], &["Potato", "Healroot"])
        .given_garden("garden", vec![at(0, 0)]);
    let (region, zone) = (scenario.region, scenario.zone("garden"));

    let result = scenario.gardens.set_plant_allowed(region, zone, "Rice", true);
    assert_eq!(
        result,
        Err(GardensError::Zoning(ZoningError::PlantNotEligible {
            name: "Rice".to_string()
        }))
    );

    let events = scenario
        .gardens
        .set_plant_allowed(region, zone, "Potato", false)
        .unwrap();
    assert_eq!(
        events,
        vec![Zoning::FilterChanged {
            id: zone,
            allowed: vec!["Healroot".to_string()]
        }]
    );
}

#[test]
fn test_unknown_plant_is_reported() {
    let mut scenario = GardenTestScenario::new()
        .given_region([4, 4], &["Potato"])
        .given_garden("garden", vec![at(0, 0)]);
    let (region, zone) = (scenario.region, scenario.zone("garden"));

    let result = scenario.gardens.set_plant_allowed(region, zone, "Mandrake", true);

    assert_eq!(
        result,
        Err(GardensError::KindNotFound {
            name: "Mandrake".to_string()
        })
    );
}
