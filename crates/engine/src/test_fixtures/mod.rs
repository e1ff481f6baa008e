//! Common test helpers for building players and request bodies.

use roster_domain::{
    Birthday, Experience, Player, PlayerId, PlayerName, PlayerProfile, PlayerTitle, Profession,
    Race,
};
use roster_shared::CreatePlayerRequest;

/// 2010-10-10T00:00:00Z
pub const SAMPLE_BIRTHDAY_MILLIS: i64 = 1_286_668_800_000;

/// A valid unbanned human warrior with the given name and experience.
pub fn profile(name: &str, experience: i64) -> PlayerProfile {
    PlayerProfile::new(
        PlayerName::new(name).expect("fixture name is valid"),
        PlayerTitle::new("Son of Gloin").expect("fixture title is valid"),
        Race::Human,
        Profession::Warrior,
        Birthday::from_millis(SAMPLE_BIRTHDAY_MILLIS).expect("fixture birthday is valid"),
        Experience::new(experience).expect("fixture experience is valid"),
    )
}

pub fn player(id: i64, name: &str, experience: i64) -> Player {
    Player::new(
        PlayerId::new(id).expect("fixture id is valid"),
        profile(name, experience),
    )
}

/// A create body that passes every validation rule.
pub fn create_request() -> CreatePlayerRequest {
    CreatePlayerRequest {
        name: Some("Gimli".to_string()),
        title: Some("Lord of the Glittering Caves".to_string()),
        race: Some("DWARF".to_string()),
        profession: Some("WARRIOR".to_string()),
        birthday: Some(SAMPLE_BIRTHDAY_MILLIS),
        banned: None,
        experience: Some(0),
    }
}
