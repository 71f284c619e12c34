mod storage;
pub mod validation;

pub use storage::{JsonFileStorage, MemoryStorage, Storage};

use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::{Document, Mission, MissionInput, MissionQuery};

/// The mission collection, held in memory and written through to storage.
///
/// Reads share the collection. Every mutation holds the write lock across
/// the whole read-modify-persist cycle, and only replaces the in-memory
/// collection after the storage write succeeded.
pub struct MissionStore {
    storage: Box<dyn Storage>,
    missions: RwLock<Vec<Mission>>,
}

impl MissionStore {
    /// Loads the collection, installing the seed missions when the document
    /// or its `missions` array does not exist yet. A document that repeats
    /// an id is rejected.
    pub fn open<S: Storage + 'static>(storage: S) -> Result<Self> {
        let missions = match storage.load()? {
            Some(Document {
                missions: Some(missions),
            }) => {
                check_unique_ids(&missions)?;
                missions
            }
            _ => {
                let seed = seed_missions(Utc::now());
                storage.save(&seed)?;
                info!(count = seed.len(), "Seeded mission store");
                seed
            }
        };

        Ok(Self {
            storage: Box::new(storage),
            missions: RwLock::new(missions),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Mission>> {
        self.missions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Mission>> {
        self.missions.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Filters by `active`, orders by `sort`, then cuts out the requested page.
    #[must_use]
    pub fn list(&self, query: &MissionQuery) -> Vec<Mission> {
        let missions = self.read();

        let mut selected: Vec<Mission> = missions
            .iter()
            .filter(|m| query.active.is_none_or(|active| m.active == active))
            .cloned()
            .collect();

        if let Some(field) = query.sort {
            selected.sort_by(|a, b| field.compare(a, b));
        }

        match query.window() {
            Some((start, size)) => selected.into_iter().skip(start).take(size).collect(),
            None => selected,
        }
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<Mission> {
        self.read().iter().find(|m| m.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn create(&self, candidate: MissionInput) -> Result<Mission> {
        let mut missions = self.write();

        let id = missions
            .iter()
            .map(|m| m.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(Error::IdsExhausted)?;
        let mission = validation::into_mission(id, candidate)?;

        let mut next = missions.clone();
        next.push(mission.clone());
        self.storage.save(&next)?;
        *missions = next;

        info!(id, title = %mission.title, "Created mission");
        Ok(mission)
    }

    /// Merges `patch` into the mission with `id`. Returns `Ok(None)` when
    /// there is no such mission.
    pub fn update(&self, id: u64, patch: MissionInput) -> Result<Option<Mission>> {
        let mut missions = self.write();

        let Some(index) = missions.iter().position(|m| m.id == id) else {
            debug!(id, "Update of unknown mission");
            return Ok(None);
        };

        let merged = patch.merged_over(&missions[index]);
        let updated = validation::into_mission(id, merged)?;

        let mut next = missions.clone();
        next[index] = updated.clone();
        self.storage.save(&next)?;
        *missions = next;

        info!(id, "Updated mission");
        Ok(Some(updated))
    }

    /// Removes the mission with `id`. Returns whether anything was removed;
    /// an unknown id does not touch storage.
    pub fn delete(&self, id: u64) -> Result<bool> {
        let mut missions = self.write();

        let Some(index) = missions.iter().position(|m| m.id == id) else {
            debug!(id, "Delete of unknown mission");
            return Ok(false);
        };

        let mut next = missions.clone();
        next.remove(index);
        self.storage.save(&next)?;
        *missions = next;

        info!(id, "Deleted mission");
        Ok(true)
    }
}

fn check_unique_ids(missions: &[Mission]) -> Result<()> {
    let mut seen = HashSet::with_capacity(missions.len());
    for mission in missions {
        if !seen.insert(mission.id) {
            warn!(id = mission.id, "Mission file repeats an id");
            return Err(Error::DuplicateId(mission.id));
        }
    }
    Ok(())
}

/// Missions installed into an empty store.
#[must_use]
pub fn seed_missions(created_at: DateTime<Utc>) -> Vec<Mission> {
    [
        (1, "Rescue cat stuck in asteroid", 500.0, true),
        (2, "Escort Royal Fleet", 5000.0, true),
        (3, "Pirates attacking the station", 2500.0, false),
    ]
    .into_iter()
    .map(|(id, title, reward, active)| Mission {
        id,
        title: title.to_string(),
        reward,
        active,
        created_at,
        created_by: "user".to_string(),
    })
    .collect()
}
