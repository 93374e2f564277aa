use chrono::{DateTime, Utc};
use uuid::Uuid;

use zevo_shared::clients::store::{bounded_head, caps, keys, LocalStore};
use zevo_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::{SaveProfileRequest, StoredProfile};

/// Build the next profile value from a save request. Validation happens
/// here, before anything is written: a rejected save has no persistence
/// side effect. The identifier and creation timestamp survive resaves.
pub fn build_profile(
    req: &SaveProfileRequest,
    existing: Option<&StoredProfile>,
    now: DateTime<Utc>,
) -> AppResult<StoredProfile> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::new(
            ErrorCode::InvalidProfileName,
            "profile name is required",
        ));
    }

    Ok(StoredProfile {
        profile_id: existing.map(|p| p.profile_id).unwrap_or_else(Uuid::now_v7),
        name: name.to_string(),
        city: req.city.trim().to_string(),
        skill_level: req.skill_level,
        interests: req.interests.clone(),
        created_at: existing.map(|p| p.created_at).unwrap_or(now),
        updated_at: now,
    })
}

/// Merge a profile into the public roster: the fresh copy goes first and
/// replaces any previous copy with the same identifier.
pub fn merge_public_roster(
    roster: Vec<StoredProfile>,
    profile: StoredProfile,
) -> Vec<StoredProfile> {
    let mut merged = Vec::with_capacity(roster.len() + 1);
    merged.push(profile.clone());
    merged.extend(
        roster
            .into_iter()
            .filter(|p| p.profile_id != profile.profile_id),
    );
    bounded_head(merged, caps::PUBLIC_PROFILES)
}

/// Validate, persist, and publish the profile blob plus the bounded
/// public roster.
pub async fn save_profile(
    store: &LocalStore,
    req: &SaveProfileRequest,
) -> AppResult<StoredProfile> {
    let existing: Option<StoredProfile> = store.get_json(keys::PROFILE).await?;
    let profile = build_profile(req, existing.as_ref(), Utc::now())?;

    store.set_json(keys::PROFILE, &profile).await?;

    let roster: Vec<StoredProfile> = store.get_list(keys::PUBLIC_PROFILES).await?;
    let merged = merge_public_roster(roster, profile.clone());
    store.set_json(keys::PUBLIC_PROFILES, &merged).await?;

    tracing::info!(
        profile_id = %profile.profile_id,
        name = %profile.name,
        "profile saved"
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillLevel;
    use zevo_shared::types::Sport;

    fn request(name: &str) -> SaveProfileRequest {
        SaveProfileRequest {
            name: name.to_string(),
            city: "  Mohali ".to_string(),
            skill_level: SkillLevel::Intermediate,
            interests: vec![Sport::Football, Sport::Badminton],
        }
    }

    fn stored(name: &str) -> StoredProfile {
        build_profile(&request(name), None, Utc::now()).unwrap()
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = build_profile(&request(""), None, Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Known { code: ErrorCode::InvalidProfileName, .. }
        ));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        assert!(build_profile(&request("   "), None, Utc::now()).is_err());
    }

    #[test]
    fn name_and_city_are_trimmed() {
        let profile = build_profile(&request("  Arjun "), None, Utc::now()).unwrap();
        assert_eq!(profile.name, "Arjun");
        assert_eq!(profile.city, "Mohali");
    }

    #[test]
    fn resave_keeps_identity_and_creation_time() {
        let first = stored("Arjun");
        let later = first.created_at + chrono::Duration::hours(1);

        let second = build_profile(&request("Arjun K"), Some(&first), later).unwrap();

        assert_eq!(second.profile_id, first.profile_id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.updated_at, later);
        assert_eq!(second.name, "Arjun K");
    }

    #[test]
    fn roster_merge_replaces_own_entry_first() {
        let mine = stored("Arjun");
        let other = stored("Simran");
        let mut updated = mine.clone();
        updated.city = "Kharar".to_string();

        let merged = merge_public_roster(vec![other.clone(), mine], updated.clone());

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], updated);
        assert_eq!(merged[1], other);
    }

    #[test]
    fn roster_is_bounded() {
        let roster: Vec<StoredProfile> = (0..caps::PUBLIC_PROFILES)
            .map(|i| stored(&format!("Player {i}")))
            .collect();

        let merged = merge_public_roster(roster, stored("Newcomer"));

        assert_eq!(merged.len(), caps::PUBLIC_PROFILES);
        assert_eq!(merged[0].name, "Newcomer");
    }
}
