//! Player aggregate - the single entity managed by the roster
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: validated names, birthday and experience
//! - **Valid by construction**: `new()` takes pre-validated types
//! - **Derived state**: level and untilNextLevel are never stored independently
//!   of experience; every path that sets experience re-derives both

use serde::Serialize;

use crate::leveling::Leveling;
use crate::types::{Profession, Race};
use crate::value_objects::{Birthday, Experience, PlayerName, PlayerTitle};
use crate::PlayerId;

/// Every client-settable player field plus the derived leveling.
///
/// # Invariants
///
/// - `leveling == Leveling::from_experience(experience)`
///
/// # Example
///
/// ```
/// use roster_domain::{Birthday, Experience, PlayerName, PlayerProfile, PlayerTitle, Profession, Race};
///
/// let profile = PlayerProfile::new(
///     PlayerName::new("Frodo").unwrap(),
///     PlayerTitle::new("Ring-bearer").unwrap(),
///     Race::Hobbit,
///     Profession::Rogue,
///     Birthday::from_millis(1_286_668_800_000).unwrap(),
///     Experience::new(300).unwrap(),
/// );
///
/// assert_eq!(profile.leveling().level, 2);
/// assert!(!profile.is_banned());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    name: PlayerName,
    title: PlayerTitle,
    race: Race,
    profession: Profession,
    birthday: Birthday,
    banned: bool,
    experience: Experience,
    #[serde(flatten)]
    leveling: Leveling,
}

impl PlayerProfile {
    /// Create a profile. Players start unbanned.
    pub fn new(
        name: PlayerName,
        title: PlayerTitle,
        race: Race,
        profession: Profession,
        birthday: Birthday,
        experience: Experience,
    ) -> Self {
        Self {
            name,
            title,
            race,
            profession,
            birthday,
            banned: false,
            experience,
            leveling: Leveling::from_experience(experience),
        }
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn title(&self) -> &PlayerTitle {
        &self.title
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn profession(&self) -> Profession {
        self.profession
    }

    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    pub fn is_banned(&self) -> bool {
        self.banned
    }

    pub fn experience(&self) -> Experience {
        self.experience
    }

    pub fn leveling(&self) -> Leveling {
        self.leveling
    }

    fn set_experience(&mut self, experience: Experience) {
        self.experience = experience;
        self.leveling = Leveling::from_experience(experience);
    }
}

/// A stored player: store-assigned id plus profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    #[serde(flatten)]
    profile: PlayerProfile,
}

impl Player {
    pub fn new(id: PlayerId, profile: PlayerProfile) -> Self {
        Self { id, profile }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn name(&self) -> &PlayerName {
        self.profile.name()
    }

    pub fn title(&self) -> &PlayerTitle {
        self.profile.title()
    }

    pub fn race(&self) -> Race {
        self.profile.race()
    }

    pub fn profession(&self) -> Profession {
        self.profile.profession()
    }

    pub fn birthday(&self) -> Birthday {
        self.profile.birthday()
    }

    pub fn is_banned(&self) -> bool {
        self.profile.is_banned()
    }

    pub fn experience(&self) -> Experience {
        self.profile.experience()
    }

    pub fn level(&self) -> u32 {
        self.profile.leveling().level
    }

    pub fn until_next_level(&self) -> u32 {
        self.profile.leveling().until_next_level
    }

    /// Produce a new snapshot with every present patch field applied.
    ///
    /// `self` is left untouched; the id never changes.
    pub fn apply(&self, patch: PlayerPatch) -> Player {
        let mut profile = self.profile.clone();
        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(title) = patch.title {
            profile.title = title;
        }
        if let Some(race) = patch.race {
            profile.race = race;
        }
        if let Some(profession) = patch.profession {
            profile.profession = profession;
        }
        if let Some(birthday) = patch.birthday {
            profile.birthday = birthday;
        }
        if let Some(banned) = patch.banned {
            profile.banned = banned;
        }
        if let Some(experience) = patch.experience {
            profile.set_experience(experience);
        }
        Player {
            id: self.id,
            profile,
        }
    }
}

/// Optional field overrides for a partial update.
///
/// Every present field is already validated; absent fields leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerPatch {
    pub name: Option<PlayerName>,
    pub title: Option<PlayerTitle>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<Birthday>,
    pub banned: Option<bool>,
    pub experience: Option<Experience>,
}

impl PlayerPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(experience: i64) -> PlayerProfile {
        PlayerProfile::new(
            PlayerName::new("Aragorn").unwrap(),
            PlayerTitle::new("King of Gondor").unwrap(),
            Race::Human,
            Profession::Warrior,
            Birthday::from_millis(1_286_668_800_000).unwrap(),
            Experience::new(experience).unwrap(),
        )
    }

    fn player(experience: i64) -> Player {
        Player::new(PlayerId::new(1).unwrap(), profile(experience))
    }

    #[test]
    fn new_profile_derives_leveling() {
        let p = profile(0);
        assert_eq!(p.leveling().level, 0);
        assert_eq!(p.leveling().until_next_level, 100);
        assert!(!p.is_banned());
    }

    #[test]
    fn experience_patch_rederives_leveling_and_keeps_other_fields() {
        let before = player(0);
        let patch = PlayerPatch {
            experience: Some(Experience::new(600).unwrap()),
            ..Default::default()
        };

        let after = before.apply(patch);

        assert_eq!(after.level(), 3);
        assert_eq!(after.until_next_level(), 400);
        assert_eq!(after.name(), before.name());
        assert_eq!(after.title(), before.title());
        assert_eq!(after.race(), before.race());
        assert_eq!(after.profession(), before.profession());
        assert_eq!(after.birthday(), before.birthday());
        assert_eq!(after.is_banned(), before.is_banned());
        assert_eq!(after.id(), before.id());
        // Original snapshot is untouched
        assert_eq!(before.level(), 0);
    }

    #[test]
    fn empty_patch_is_identity() {
        let before = player(1234);
        assert!(PlayerPatch::default().is_empty());
        assert_eq!(before.apply(PlayerPatch::default()), before);
    }

    #[test]
    fn patch_overrides_present_fields() {
        let before = player(10);
        let patch = PlayerPatch {
            name: Some(PlayerName::new("Strider").unwrap()),
            race: Some(Race::Elf),
            banned: Some(true),
            ..Default::default()
        };
        let after = before.apply(patch);
        assert_eq!(after.name().as_str(), "Strider");
        assert_eq!(after.race(), Race::Elf);
        assert!(after.is_banned());
        assert_eq!(after.title(), before.title());
        assert_eq!(after.experience(), before.experience());
    }

    #[test]
    fn serializes_flat_camel_case() {
        let json = serde_json::to_value(player(300)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Aragorn");
        assert_eq!(json["title"], "King of Gondor");
        assert_eq!(json["race"], "HUMAN");
        assert_eq!(json["profession"], "WARRIOR");
        assert_eq!(json["birthday"], 1_286_668_800_000i64);
        assert_eq!(json["banned"], false);
        assert_eq!(json["experience"], 300);
        assert_eq!(json["level"], 2);
        assert_eq!(json["untilNextLevel"], 300);
    }
}
