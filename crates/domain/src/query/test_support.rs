//! Shared fixtures for query pipeline tests.

use proptest::prelude::*;

use crate::types::{Profession, Race};
use crate::value_objects::{Birthday, Experience, PlayerName, PlayerTitle};
use crate::{Player, PlayerId, PlayerProfile};

pub(crate) fn make_player(
    id: i64,
    name: &str,
    race: Race,
    profession: Profession,
    birthday_millis: i64,
    experience: i64,
    banned: bool,
) -> Player {
    let profile = PlayerProfile::new(
        PlayerName::new(name).unwrap(),
        PlayerTitle::new(format!("{} the Brave", name)).unwrap(),
        race,
        profession,
        Birthday::from_millis(birthday_millis).unwrap(),
        Experience::new(experience).unwrap(),
    )
    .with_banned(banned);
    Player::new(PlayerId::new(id).unwrap(), profile)
}

/// Five players in id order with distinct names, birthdays and levels.
pub(crate) fn roster() -> Vec<Player> {
    vec![
        // level 2
        make_player(1, "Aragorn", Race::Human, Profession::Warrior, 1_286_668_800_000, 300, false),
        // level 0
        make_player(2, "Frodo", Race::Hobbit, Profession::Rogue, 1_104_537_600_000, 50, false),
        // level 9
        make_player(3, "Saruman", Race::Human, Profession::Sorcerer, 978_307_200_000, 5_000, true),
        // level 3
        make_player(4, "Legolas", Race::Elf, Profession::Warrior, 1_577_836_800_000, 600, false),
        // level 1
        make_player(5, "Bilbo", Race::Hobbit, Profession::Rogue, 1_262_304_000_000, 100, true),
    ]
}

/// Arbitrary players with sequential ids and frequent key collisions.
pub(crate) fn arb_players() -> impl Strategy<Value = Vec<Player>> {
    let names = prop::sample::select(vec!["Ann", "Bob", "Cid", "Dee"]);
    let professions = prop::sample::select(vec![Profession::Warrior, Profession::Rogue]);
    let entry = (names, professions, 0i64..=5_000, any::<bool>(), 0i64..4);
    prop::collection::vec(entry, 0..24).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, profession, experience, banned, day))| {
                make_player(
                    index as i64 + 1,
                    name,
                    Race::Human,
                    profession,
                    978_307_200_000 + day * 86_400_000,
                    experience,
                    banned,
                )
            })
            .collect()
    })
}
