use serde::{Deserialize, Serialize};

use crate::types::Mission;

/// The fields of a mission that leave the server. `createdAt` and
/// `createdBy` stay internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionView {
    pub id: u64,
    pub title: String,
    pub reward: f64,
    pub active: bool,
}

#[must_use]
pub fn public_view(mission: &Mission) -> MissionView {
    MissionView {
        id: mission.id,
        title: mission.title.clone(),
        reward: mission.reward,
        active: mission.active,
    }
}

#[must_use]
pub fn public_views(missions: &[Mission]) -> Vec<MissionView> {
    missions.iter().map(public_view).collect()
}
