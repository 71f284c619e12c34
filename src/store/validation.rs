use crate::error::ValidationErrors;
use crate::types::{FieldError, Mission, MissionInput};

/// Checks a candidate or merged record. Returns every failing field in
/// the order title, reward, active, createdBy, createdAt.
#[must_use]
pub fn validate(input: &MissionInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match input.title.as_deref() {
        None => errors.push(FieldError::new("title", "title is required")),
        Some(title) if title.trim().is_empty() => {
            errors.push(FieldError::new("title", "title cannot be empty"));
        }
        Some(_) => {}
    }

    match input.reward {
        None => errors.push(FieldError::new("reward", "reward is required")),
        Some(reward) if !reward.is_finite() => {
            errors.push(FieldError::new("reward", "reward must be a finite number"));
        }
        Some(_) => {}
    }

    if input.active.is_none() {
        errors.push(FieldError::new("active", "active is required"));
    }

    if input.created_by.as_deref().is_none_or(str::is_empty) {
        errors.push(FieldError::new("createdBy", "createdBy is required"));
    }

    if input.created_at.is_none() {
        errors.push(FieldError::new("createdAt", "createdAt is invalid or not sent"));
    }

    errors
}

/// Validates `input` and turns it into a stored record with the given id.
pub fn into_mission(id: u64, input: MissionInput) -> Result<Mission, ValidationErrors> {
    let errors = validate(&input);
    match input {
        MissionInput {
            title: Some(title),
            reward: Some(reward),
            active: Some(active),
            created_at: Some(created_at),
            created_by: Some(created_by),
            ..
        } if errors.is_empty() => Ok(Mission {
            id,
            title,
            reward,
            active,
            created_at,
            created_by,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}
