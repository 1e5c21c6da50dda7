#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use log::{Level, LevelFilter, Log, Metadata, Record};

use gardens::collections::Shared;
use gardens::cultivation::AssignmentCache;
use gardens::host::{Danger, Surroundings, Target, Worker};
use gardens::math::{Random, Tile, TileMath};
use gardens::model::{
    Knowledge, PlantProperties, RegionId, Settings, Thing, ThingCategory, ThingId, ThingKey,
    ThingKind,
};
use gardens::sowing::Sowing;
use gardens::zoning::ZoneId;
use gardens::{Gardens, GardensError};

pub fn at(x: usize, y: usize) -> Tile {
    [x, y]
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(vec![]);
}

/// Keeps every record of the current thread, then forwards it to env_logger.
struct RecordingLogger {
    inner: env_logger::Logger,
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
        if self.inner.matches(record) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn init_logging() {
    let inner = env_logger::builder().is_test(true).build();
    if log::set_boxed_logger(Box::new(RecordingLogger { inner })).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Messages logged so far on this thread at the given level.
pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(record, _)| *record == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

fn define_plant(
    known: &mut Knowledge,
    id: usize,
    name: &str,
    sowable: bool,
    sow_min_skill: u8,
    fertility_min: f32,
) {
    let kind = ThingKind {
        id: ThingKey(id),
        name: name.to_string(),
        category: ThingCategory::Plant,
        plant: Some(PlantProperties {
            sowable,
            sow_min_skill,
            fertility_min,
        }),
        blocks_planting: true,
        haulable: false,
    };
    known.things.insert(kind.id, kind.name.clone(), kind);
}

fn define_thing(
    known: &mut Knowledge,
    id: usize,
    name: &str,
    category: ThingCategory,
    blocks_planting: bool,
    haulable: bool,
) {
    let kind = ThingKind {
        id: ThingKey(id),
        name: name.to_string(),
        category,
        plant: None,
        blocks_planting,
        haulable,
    };
    known.things.insert(kind.id, kind.name.clone(), kind);
}

/// Definitions every scenario starts with.
pub fn knowledge() -> Knowledge {
    let mut known = Knowledge::default();
    define_plant(&mut known, 1, "Potato", true, 0, 0.3);
    define_plant(&mut known, 2, "Rice", true, 0, 0.5);
    define_plant(&mut known, 3, "Corn", true, 0, 0.5);
    define_plant(&mut known, 4, "Healroot", true, 8, 0.5);
    define_plant(&mut known, 5, "Oak", true, 0, 0.3);
    define_plant(&mut known, 6, "Grass", false, 0, 0.0);
    define_thing(&mut known, 7, "Steel", ThingCategory::Item, true, true);
    define_thing(&mut known, 8, "Boulder", ThingCategory::Other, true, false);
    define_thing(&mut known, 9, "Wall", ThingCategory::Building, true, false);
    define_thing(&mut known, 10, "Lamp", ThingCategory::Building, false, false);
    define_thing(&mut known, 11, "Flower", ThingCategory::Item, false, true);
    known
}

pub struct FakeWorld {
    pub size: [usize; 2],
    pub fertility: HashMap<Tile, f32>,
    pub out_of_season: HashSet<String>,
    pub shade_casters: HashSet<String>,
    pub fire: HashSet<Tile>,
    pub things: Vec<Thing>,
}

impl FakeWorld {
    fn things_on(&self, tile: Tile) -> impl Iterator<Item = &Thing> {
        self.things.iter().filter(move |thing| thing.position == tile)
    }
}

impl Surroundings for FakeWorld {
    fn fertility_at(&self, tile: Tile) -> f32 {
        self.fertility.get(&tile).copied().unwrap_or(1.0)
    }

    fn is_growing_season(&self, _tile: Tile, plant: &ThingKind) -> bool {
        !self.out_of_season.contains(&plant.name)
    }

    fn plant_at(&self, tile: Tile) -> Option<Thing> {
        self.things_on(tile)
            .find(|thing| thing.kind.is_plant())
            .cloned()
    }

    fn things_at(&self, tile: Tile) -> Vec<Thing> {
        self.things_on(tile).cloned().collect()
    }

    fn building_at(&self, tile: Tile) -> Option<Thing> {
        self.things_on(tile)
            .find(|thing| thing.kind.category == ThingCategory::Building)
            .cloned()
    }

    fn adjacent_sow_blocker(&self, _plant: &ThingKind, tile: Tile) -> Option<Thing> {
        tile.adjacent(self.size).into_iter().find_map(|neighbor| {
            self.things_on(neighbor)
                .find(|thing| self.shade_casters.contains(&thing.kind.name))
                .cloned()
        })
    }

    fn contains_static_fire(&self, cells: &[Tile]) -> bool {
        cells.iter().any(|tile| self.fire.contains(tile))
    }
}

pub struct FakeWorker {
    pub forbidden: HashSet<Target>,
    pub unreservable: HashSet<Target>,
    pub unreachable: HashSet<Target>,
    pub willing_to_cut: bool,
    pub skill: Option<u8>,
}

impl Default for FakeWorker {
    fn default() -> Self {
        Self {
            forbidden: Default::default(),
            unreservable: Default::default(),
            unreachable: Default::default(),
            willing_to_cut: true,
            skill: Some(10),
        }
    }
}

impl Worker for FakeWorker {
    fn is_forbidden(&self, target: Target) -> bool {
        self.forbidden.contains(&target)
    }

    fn can_reserve(&self, target: Target, _forced: bool) -> bool {
        !self.unreservable.contains(&target)
    }

    fn can_reserve_and_reach(&self, target: Target, _danger: Danger, forced: bool) -> bool {
        self.can_reserve(target, forced) && !self.unreachable.contains(&target)
    }

    fn can_reach(&self, tile: Tile, danger: Danger) -> bool {
        danger <= Danger::Some && !self.unreachable.contains(&Target::Tile(tile))
    }

    fn normal_max_danger(&self) -> Danger {
        Danger::Some
    }

    fn is_willing_to_cut(&self, _plant: &Thing) -> bool {
        self.willing_to_cut
    }

    fn plants_skill(&self) -> Option<u8> {
        self.skill
    }
}

pub struct GardenTestScenario {
    pub gardens: Gardens,
    pub region: RegionId,
    pub world: FakeWorld,
    pub worker: FakeWorker,
    zones: HashMap<String, ZoneId>,
    things_id: usize,
    current_job: Option<Result<Sowing, GardensError>>,
}

impl GardenTestScenario {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        init_logging();
        let gardens = Gardens::new(knowledge(), settings).with_random(Random::with_seed(42));
        GardenTestScenario {
            gardens,
            region: RegionId(0),
            world: FakeWorld {
                size: [0, 0],
                fertility: Default::default(),
                out_of_season: Default::default(),
                shade_casters: Default::default(),
                fire: Default::default(),
                things: vec![],
            },
            worker: FakeWorker::default(),
            zones: Default::default(),
            things_id: 0,
            current_job: None,
        }
    }

    pub fn kind(&self, name: &str) -> Shared<ThingKind> {
        self.gardens.find_kind(name).unwrap()
    }

    pub fn key(&self, name: &str) -> ThingKey {
        self.kind(name).id
    }

    pub fn zone(&self, name: &str) -> ZoneId {
        *self.zones.get(name).unwrap()
    }

    pub fn thing(&self, kind: &str) -> ThingId {
        self.world
            .things
            .iter()
            .find(|thing| thing.kind.name == kind)
            .map(|thing| thing.id)
            .unwrap()
    }

    pub fn assignments(&self) -> &AssignmentCache {
        &self.gardens.get_region(self.region).unwrap().cultivation.assignments
    }

    pub fn assignment(&self, tile: Tile) -> Option<String> {
        let width = self.world.size[0];
        self.assignments()
            .get(tile.fit(width))
            .map(|name| name.to_string())
    }

    pub fn given_region(mut self, size: [usize; 2], flora: &[&str]) -> Self {
        let flora = flora.iter().map(|name| self.kind(name)).collect();
        self.region = self.gardens.create_region(size, flora);
        self.world.size = size;
        self
    }

    pub fn given_garden(mut self, name: &str, cells: Vec<Tile>) -> Self {
        let (zone, _) = self.gardens.create_garden(self.region, cells).unwrap();
        self.zones.insert(name.to_string(), zone);
        self
    }

    pub fn given_growing_zone(mut self, name: &str, cells: Vec<Tile>, plant: &str) -> Self {
        let plant = Some(self.kind(plant));
        let (zone, _) = self
            .gardens
            .create_growing_zone(self.region, cells, plant)
            .unwrap();
        self.zones.insert(name.to_string(), zone);
        self
    }

    pub fn given_thing(mut self, kind: &str, tile: Tile) -> Self {
        self.things_id += 1;
        let thing = Thing {
            id: ThingId(self.things_id),
            kind: self.kind(kind),
            position: tile,
        };
        self.world.things.push(thing);
        self
    }

    pub fn given_fertility(mut self, tile: Tile, fertility: f32) -> Self {
        self.world.fertility.insert(tile, fertility);
        self
    }

    pub fn given_out_of_season(mut self, kind: &str) -> Self {
        self.world.out_of_season.insert(kind.to_string());
        self
    }

    pub fn given_shade_caster(mut self, kind: &str) -> Self {
        self.world.shade_casters.insert(kind.to_string());
        self
    }

    pub fn given_fire(mut self, tile: Tile) -> Self {
        self.world.fire.insert(tile);
        self
    }

    pub fn given_worker<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut FakeWorker, &Self),
    {
        let mut worker = std::mem::take(&mut self.worker);
        setup(&mut worker, &self);
        self.worker = worker;
        self
    }

    pub fn given_action<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Gardens, RegionId, &HashMap<String, ZoneId>),
    {
        action(&mut self.gardens, self.region, &self.zones);
        self
    }

    pub fn when_job_on_cell(mut self, zone: &str, tile: Tile) -> Self {
        let zone = self.zone(zone);
        let job = self.gardens.job_on_cell(
            self.region,
            zone,
            &self.worker,
            &self.world,
            tile,
            false,
        );
        self.current_job = Some(job);
        self
    }

    pub fn then_job_should_be<F>(self, expected: F) -> Self
    where
        F: FnOnce(&Self) -> Sowing,
    {
        let expected = expected(&self);
        match &self.current_job {
            Some(Ok(job)) => assert_eq!(job, &expected),
            other => panic!("expected job {:?}, got {:?}", expected, other),
        }
        self
    }

    pub fn then_assignment_should_be(self, tile: Tile, expected: Option<&str>) -> Self {
        assert_eq!(self.assignment(tile).as_deref(), expected);
        self
    }

    pub fn work_cells(&self, base: Vec<Tile>) -> Vec<Tile> {
        self.gardens
            .potential_work_cells(self.region, base, &self.worker, &self.world)
            .unwrap()
            .collect()
    }
}
