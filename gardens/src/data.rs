use log::{debug, info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::de;

use crate::collections::{DictionaryError, Shared};
use crate::cultivation::{AssignmentCache, CultivationError};
use crate::model::{Knowledge, Region, RegionId, Settings, ThingKey, ThingKind};
use crate::storage::Storage;
use crate::zoning::{FilterState, Garden, GrowingZone, PlantFilter, Zone, ZoneId, ZonePolicy};
use crate::Gardens;

impl Gardens {
    /// Restores a session saved with [`Gardens::save`].
    pub fn open(storage: &Storage) -> Result<Self, DataError> {
        info!("Begin gardens loading");
        let known = load_knowledge(storage)?;
        let settings = load_settings(storage)?;
        let mut gardens = Gardens::new(known, settings);
        let regions = storage.find_all("Region", |row| gardens.load_region(storage, row))?;
        for region in &regions {
            gardens.regions_id.register(region.id.0);
        }
        gardens.regions = regions;
        info!(
            "End gardens loading, {} definitions, {} regions",
            gardens.known.things.len(),
            gardens.regions.len()
        );
        Ok(gardens)
    }

    pub fn save(&self, storage: &Storage) -> Result<(), DataError> {
        info!("Begin gardens saving");
        let transaction = storage.connection().unchecked_transaction()?;
        transaction.execute(
            "insert or replace into Settings (id, value) values (0, ?)",
            [serde_json::to_string(&self.settings)?],
        )?;
        transaction.execute("delete from Zone", [])?;
        transaction.execute("delete from Region", [])?;
        for region in &self.regions {
            let flora: Vec<&str> = region
                .ambient_flora
                .iter()
                .map(|kind| kind.name.as_str())
                .collect();
            transaction.execute(
                "insert into Region (id, width, height, flora, fingerprint, assignments)
                 values (?, ?, ?, ?, ?, ?)",
                params![
                    region.id.0,
                    region.size[0],
                    region.size[1],
                    serde_json::to_string(&flora)?,
                    region.cultivation.eligible.fingerprint,
                    region.cultivation.assignments.as_bytes()?
                ],
            )?;
            for zone in &region.zoning.zones {
                save_zone(&transaction, region.id, zone)?;
            }
        }
        transaction.commit()?;
        info!("End gardens saving, {} regions", self.regions.len());
        Ok(())
    }

    /// Writes definitions, the host database normally provides them.
    pub fn save_knowledge(&self, storage: &Storage) -> Result<(), DataError> {
        for kind in self.known.things.iter() {
            let plant = match &kind.plant {
                Some(plant) => Some(serde_json::to_string(plant)?),
                None => None,
            };
            storage.connection().execute(
                "insert or replace into ThingKind
                 (id, name, category, plant, blocks_planting, haulable)
                 values (?, ?, ?, ?, ?, ?)",
                params![
                    kind.id.0,
                    kind.name,
                    serde_json::to_string(&kind.category)?,
                    plant,
                    kind.blocks_planting,
                    kind.haulable
                ],
            )?;
        }
        Ok(())
    }

    fn load_region(&self, storage: &Storage, row: &Row) -> Result<Region, DataError> {
        let id = RegionId(row.get("id")?);
        let size = [row.get("width")?, row.get("height")?];
        let flora: Vec<String> = row.get_json("flora")?;
        let flora = self.find_kinds(&flora)?;
        let eligible = self.eligible_plants();
        let fingerprint: i32 = row.get("fingerprint")?;
        if fingerprint != eligible.fingerprint {
            warn!(
                "Eligible plants of region {:?} changed since it was saved, fingerprint {} now {}",
                id, fingerprint, eligible.fingerprint
            );
        }
        let mut region = Region::new(id, size, flora, eligible);
        let assignments: Vec<u8> = row.get("assignments")?;
        region.cultivation.assignments = AssignmentCache::from_bytes(&assignments)?;
        let zones = storage.find_many("Zone", "region", id.0, |row| self.load_zone(row))?;
        region.zoning.load_zones(zones);
        for event in region.zoning.activate_gardens(&region.ambient_flora) {
            debug!("Region {:?} activation {:?}", id, event);
        }
        Ok(region)
    }

    fn load_zone(&self, row: &Row) -> Result<Zone, DataError> {
        let id = ZoneId(row.get("id")?);
        let kind: String = row.get("kind")?;
        let allow_sow = row.get("allow_sow")?;
        let allow_cut = row.get("allow_cut")?;
        let policy = match kind.as_str() {
            "garden" => {
                let filter: Option<Vec<String>> = row.get_json_optional("filter")?;
                let filter = match filter {
                    Some(names) => {
                        let mut filter = PlantFilter::default();
                        for kind in self.find_kinds(&names)? {
                            filter.set_allow(&kind, true);
                        }
                        FilterState::Built(filter)
                    }
                    None => FilterState::Uninitialized,
                };
                ZonePolicy::Garden(Garden {
                    filter,
                    allow_sow,
                    allow_cut,
                })
            }
            "growing" => {
                let plant: Option<String> = row.get("plant")?;
                let plant = match plant {
                    Some(name) => Some(self.known.things.find(&name)?),
                    None => None,
                };
                ZonePolicy::Growing(GrowingZone {
                    plant,
                    allow_sow,
                    allow_cut,
                })
            }
            _ => return Err(DataError::UnknownZoneKind { kind }),
        };
        Ok(Zone::new(
            id,
            row.get("label")?,
            row.get_json("cells")?,
            policy,
        ))
    }

    fn find_kinds(&self, names: &[String]) -> Result<Vec<Shared<ThingKind>>, DictionaryError> {
        names
            .iter()
            .map(|name| self.known.things.find(name))
            .collect()
    }
}

pub fn load_knowledge(storage: &Storage) -> Result<Knowledge, DataError> {
    let mut known = Knowledge::default();
    for kind in storage.find_all("ThingKind", load_thing_kind)? {
        known.things.insert(kind.id, kind.name.clone(), kind);
    }
    Ok(known)
}

pub fn load_settings(storage: &Storage) -> Result<Settings, DataError> {
    let value: Option<String> = storage
        .connection()
        .query_row("select value from Settings where id = 0", [], |row| {
            row.get(0)
        })
        .optional()?;
    match value {
        Some(value) => Ok(serde_json::from_str(&value)?),
        None => Ok(Settings::default()),
    }
}

fn load_thing_kind(row: &Row) -> Result<ThingKind, DataError> {
    let data = ThingKind {
        id: ThingKey(row.get("id")?),
        name: row.get("name")?,
        category: row.get_json("category")?,
        plant: row.get_json_optional("plant")?,
        blocks_planting: row.get("blocks_planting")?,
        haulable: row.get("haulable")?,
    };
    Ok(data)
}

fn save_zone(connection: &Connection, region: RegionId, zone: &Zone) -> Result<(), DataError> {
    let (kind, filter, allow_sow, allow_cut, plant) = match &zone.policy {
        ZonePolicy::Garden(garden) => {
            let filter = match garden.filter() {
                Some(filter) => Some(serde_json::to_string(&filter.names())?),
                None => None,
            };
            ("garden", filter, garden.allow_sow, garden.allow_cut, None)
        }
        ZonePolicy::Growing(growing) => {
            let plant = growing.plant.as_ref().map(|plant| plant.name.clone());
            ("growing", None, growing.allow_sow, growing.allow_cut, plant)
        }
    };
    connection.execute(
        "insert into Zone
         (id, region, label, kind, cells, filter, allow_sow, allow_cut, plant)
         values (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            zone.id.0,
            region.0,
            zone.label,
            kind,
            serde_json::to_string(&zone.cells)?,
            filter,
            allow_sow,
            allow_cut,
            plant
        ],
    )?;
    Ok(())
}

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Sql(rusqlite::Error),
    Bincode(bincode::error::DecodeError),
    Encode(bincode::error::EncodeError),
    Inconsistency(DictionaryError),
    UnknownZoneKind { kind: String },
}

impl From<CultivationError> for DataError {
    fn from(error: CultivationError) -> Self {
        match error {
            CultivationError::Encode(error) => Self::Encode(error),
            CultivationError::Decode(error) => Self::Bincode(error),
        }
    }
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

pub trait JsonDeserializer {
    fn get_json<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned;

    fn get_json_optional<T>(&self, index: &str) -> Result<Option<T>, DataError>
    where
        T: de::DeserializeOwned;
}

impl<'stmt> JsonDeserializer for Row<'stmt> {
    fn get_json<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned,
    {
        let value: String = self.get(index)?;
        let value = serde_json::from_str(&value)?;
        Ok(value)
    }

    fn get_json_optional<T>(&self, index: &str) -> Result<Option<T>, DataError>
    where
        T: de::DeserializeOwned,
    {
        let value: Option<String> = self.get(index)?;
        match value {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }
}
