use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored mission. `created_at` and `created_by` are set once by `create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: u64,
    pub title: String,
    pub reward: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

/// Loosely-typed mission payload: a create candidate or an update patch.
///
/// Every field is optional so that missing values surface as validation
/// errors instead of deserialization failures. `id` is accepted for
/// compatibility with clients that echo whole records back, but the store
/// never reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl MissionInput {
    /// Overlays this patch on `existing`. Fields the patch leaves out keep
    /// their stored values; `created_at` and `created_by` always come from
    /// `existing`.
    #[must_use]
    pub fn merged_over(self, existing: &Mission) -> MissionInput {
        MissionInput {
            id: Some(existing.id),
            title: self.title.or_else(|| Some(existing.title.clone())),
            reward: self.reward.or(Some(existing.reward)),
            active: self.active.or(Some(existing.active)),
            created_at: Some(existing.created_at),
            created_by: Some(existing.created_by.clone()),
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// On-disk layout of the mission file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missions: Option<Vec<Mission>>,
}

impl Document {
    #[must_use]
    pub fn with_missions(missions: Vec<Mission>) -> Self {
        Self {
            missions: Some(missions),
        }
    }
}
