use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use zevo_shared::types::Sport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// The player profile as persisted. Exactly one profile is owned by the
/// client key; it is replaced wholesale on each save and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub profile_id: Uuid,
    pub name: String,
    pub city: String,
    pub skill_level: SkillLevel,
    pub interests: Vec<Sport>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
    pub name: String,
    #[serde(default)]
    pub city: String,
    pub skill_level: SkillLevel,
    #[serde(default)]
    pub interests: Vec<Sport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HelpRequestPayload {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}
