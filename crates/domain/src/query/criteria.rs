//! Filter engine: optional predicates over players, combined with AND.

use crate::types::{Profession, Race};
use crate::Player;

/// Independently optional filter predicates.
///
/// An absent field imposes no constraint. Text matches are case-sensitive
/// substring containment; ranges and timestamps are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerCriteria {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Lower bound on birthday, epoch milliseconds
    pub after: Option<i64>,
    /// Upper bound on birthday, epoch milliseconds
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl PlayerCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `player` satisfies every present predicate.
    pub fn matches(&self, player: &Player) -> bool {
        let birthday = player.birthday().timestamp_millis();
        let experience = i64::from(player.experience().points());
        let level = i64::from(player.level());

        self.name
            .as_deref()
            .is_none_or(|name| player.name().as_str().contains(name))
            && self
                .title
                .as_deref()
                .is_none_or(|title| player.title().as_str().contains(title))
            && self.race.is_none_or(|race| player.race() == race)
            && self
                .profession
                .is_none_or(|profession| player.profession() == profession)
            && self.after.is_none_or(|after| birthday >= after)
            && self.before.is_none_or(|before| birthday <= before)
            && self.banned.is_none_or(|banned| player.is_banned() == banned)
            && self.min_experience.is_none_or(|min| experience >= min)
            && self.max_experience.is_none_or(|max| experience <= max)
            && self.min_level.is_none_or(|min| level >= min)
            && self.max_level.is_none_or(|max| level <= max)
    }
}

/// Keep the players matching `criteria`, preserving their relative order.
pub fn filter(players: Vec<Player>, criteria: &PlayerCriteria) -> Vec<Player> {
    if criteria.is_empty() {
        return players;
    }
    players
        .into_iter()
        .filter(|player| criteria.matches(player))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_support::{arb_players, roster};
    use proptest::prelude::*;

    fn ids(players: &[Player]) -> Vec<i64> {
        players.iter().map(|p| p.id().get()).collect()
    }

    #[test]
    fn empty_criteria_returns_input_unchanged() {
        let players = roster();
        let expected = ids(&players);
        let filtered = filter(players, &PlayerCriteria::default());
        assert_eq!(ids(&filtered), expected);
    }

    #[test]
    fn name_filter_is_case_sensitive_substring() {
        let criteria = PlayerCriteria {
            name: Some("r".to_string()),
            ..Default::default()
        };
        let filtered = filter(roster(), &criteria);
        let names: Vec<&str> = filtered.iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Aragorn", "Frodo", "Saruman"]);

        let upper = PlayerCriteria {
            name: Some("R".to_string()),
            ..Default::default()
        };
        assert!(filter(roster(), &upper).is_empty());
    }

    #[test]
    fn title_filter_is_case_sensitive_substring() {
        let title = |text: &str| PlayerCriteria {
            title: Some(text.to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(roster(), &title("the B"))), vec![1, 2, 3, 4, 5]);
        // Matches mid-title, so this is not a prefix test
        assert_eq!(ids(&filter(roster(), &title("n the"))), vec![1, 3]);
        assert!(filter(roster(), &title("brave")).is_empty());
    }

    #[test]
    fn profession_filter_matches_exactly() {
        let profession = |profession: Profession| PlayerCriteria {
            profession: Some(profession),
            ..Default::default()
        };
        assert_eq!(ids(&filter(roster(), &profession(Profession::Rogue))), vec![2, 5]);
        assert_eq!(ids(&filter(roster(), &profession(Profession::Warrior))), vec![1, 4]);
        assert!(filter(roster(), &profession(Profession::Cleric)).is_empty());
    }

    #[test]
    fn race_and_banned_are_anded() {
        let criteria = PlayerCriteria {
            race: Some(Race::Hobbit),
            banned: Some(false),
            ..Default::default()
        };
        let filtered = filter(roster(), &criteria);
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn ranges_are_inclusive() {
        let criteria = PlayerCriteria {
            min_experience: Some(300),
            max_experience: Some(600),
            ..Default::default()
        };
        assert_eq!(ids(&filter(roster(), &criteria)), vec![1, 4]);

        let levels = PlayerCriteria {
            min_level: Some(2),
            max_level: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&filter(roster(), &levels)), vec![1]);
    }

    #[test]
    fn birthday_bounds_are_inclusive() {
        let players = roster();
        let exact = players[0].birthday().timestamp_millis();
        let criteria = PlayerCriteria {
            after: Some(exact),
            before: Some(exact),
            ..Default::default()
        };
        assert_eq!(ids(&filter(players, &criteria)), vec![1]);
    }

    proptest! {
        #[test]
        fn predicate_composition_commutes(
            players in arb_players(),
            min_xp in 0i64..=5_000,
            banned in any::<bool>(),
            rogue in any::<bool>(),
        ) {
            let profession = if rogue { Profession::Rogue } else { Profession::Warrior };
            let by_xp = PlayerCriteria { min_experience: Some(min_xp), ..Default::default() };
            let by_ban = PlayerCriteria { banned: Some(banned), ..Default::default() };
            let by_profession = PlayerCriteria { profession: Some(profession), ..Default::default() };
            let all = PlayerCriteria {
                min_experience: Some(min_xp),
                banned: Some(banned),
                profession: Some(profession),
                ..Default::default()
            };

            let forward = filter(
                filter(filter(players.clone(), &by_xp), &by_ban),
                &by_profession,
            );
            let backward = filter(
                filter(filter(players.clone(), &by_profession), &by_ban),
                &by_xp,
            );
            let combined = filter(players, &all);

            prop_assert_eq!(ids(&forward), ids(&backward));
            prop_assert_eq!(ids(&forward), ids(&combined));
        }
    }
}
