//! Request validation for player use cases.
//!
//! Turns raw wire DTOs into validated domain values. Nothing here touches
//! the store.

use std::fmt::Display;
use std::str::FromStr;

use roster_domain::{
    Birthday, DomainError, Experience, PageRequest, PlayerCriteria, PlayerName, PlayerOrder,
    PlayerPatch, PlayerProfile, PlayerTitle, Profession, Race,
};
use roster_shared::{CreatePlayerRequest, PlayerQueryParams, UpdatePlayerRequest};

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Missing { field_name: &'static str },

    #[error("{field_name} is out of range: {reason}")]
    OutOfRange {
        field_name: &'static str,
        reason: String,
    },

    #[error("{field_name} is invalid: {reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

/// Listing inputs parsed from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub criteria: PlayerCriteria,
    pub order: Option<PlayerOrder>,
    pub page: PageRequest,
}

/// Validate a value is present.
pub fn require_present<T>(value: Option<T>, field_name: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field_name })
}

fn invalid(field_name: &'static str) -> impl Fn(DomainError) -> ValidationError {
    move |e| ValidationError::Invalid {
        field_name,
        reason: e.to_string(),
    }
}

fn name(value: &str) -> Result<PlayerName, ValidationError> {
    PlayerName::new(value).map_err(invalid("name"))
}

fn title(value: &str) -> Result<PlayerTitle, ValidationError> {
    PlayerTitle::new(value).map_err(invalid("title"))
}

fn race(value: &str) -> Result<Race, ValidationError> {
    value.parse::<Race>().map_err(invalid("race"))
}

fn profession(value: &str) -> Result<Profession, ValidationError> {
    value.parse::<Profession>().map_err(invalid("profession"))
}

fn birthday(millis: i64) -> Result<Birthday, ValidationError> {
    Birthday::from_millis(millis).map_err(|e| ValidationError::OutOfRange {
        field_name: "birthday",
        reason: e.to_string(),
    })
}

fn experience(points: i64) -> Result<Experience, ValidationError> {
    Experience::new(points).map_err(|e| ValidationError::OutOfRange {
        field_name: "experience",
        reason: e.to_string(),
    })
}

/// Validate a create body and build the profile to store.
///
/// Every field except `banned` is required; `banned` defaults to false.
/// Leveling is derived from experience by the profile itself.
pub fn validate_create(request: &CreatePlayerRequest) -> Result<PlayerProfile, ValidationError> {
    let name = name(require_present(request.name.as_deref(), "name")?)?;
    let title = title(require_present(request.title.as_deref(), "title")?)?;
    let race = race(require_present(request.race.as_deref(), "race")?)?;
    let profession = profession(require_present(request.profession.as_deref(), "profession")?)?;
    let birthday = birthday(require_present(request.birthday, "birthday")?)?;
    let experience = experience(require_present(request.experience, "experience")?)?;

    Ok(
        PlayerProfile::new(name, title, race, profession, birthday, experience)
            .with_banned(request.banned.unwrap_or(false)),
    )
}

/// Whether a create body would be accepted.
pub fn is_valid(request: &CreatePlayerRequest) -> bool {
    validate_create(request).is_ok()
}

/// Validate every present field of an update body.
///
/// The first failing field rejects the whole patch.
pub fn validate_update(request: &UpdatePlayerRequest) -> Result<PlayerPatch, ValidationError> {
    Ok(PlayerPatch {
        name: request.name.as_deref().map(name).transpose()?,
        title: request.title.as_deref().map(title).transpose()?,
        race: request.race.as_deref().map(race).transpose()?,
        profession: request.profession.as_deref().map(profession).transpose()?,
        birthday: request.birthday.map(birthday).transpose()?,
        banned: request.banned,
        experience: request.experience.map(experience).transpose()?,
    })
}

/// A query value that was actually given; `minLevel=` counts as absent.
fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parsed<T>(value: &Option<String>, field_name: &'static str) -> Result<Option<T>, ValidationError>
where
    T: FromStr,
    T::Err: Display,
{
    given(value)
        .map(|v| {
            v.parse::<T>().map_err(|e| ValidationError::Invalid {
                field_name,
                reason: e.to_string(),
            })
        })
        .transpose()
}

/// Parse the filter part of listing parameters. Unknown race or profession
/// values are rejected; order and paging are not looked at.
///
/// `name` and `title` are kept even when empty, since the empty substring
/// matches every player.
pub fn validate_filter(params: &PlayerQueryParams) -> Result<PlayerCriteria, ValidationError> {
    Ok(PlayerCriteria {
        name: params.name.clone(),
        title: params.title.clone(),
        race: given(&params.race).map(race).transpose()?,
        profession: given(&params.profession).map(profession).transpose()?,
        after: parsed(&params.after, "after")?,
        before: parsed(&params.before, "before")?,
        banned: parsed(&params.banned, "banned")?,
        min_experience: parsed(&params.min_experience, "minExperience")?,
        max_experience: parsed(&params.max_experience, "maxExperience")?,
        min_level: parsed(&params.min_level, "minLevel")?,
        max_level: parsed(&params.max_level, "maxLevel")?,
    })
}

/// Parse listing parameters. Unknown order values are rejected, as are
/// negative or non-numeric paging values.
pub fn validate_criteria(params: &PlayerQueryParams) -> Result<PlayerQuery, ValidationError> {
    let criteria = validate_filter(params)?;
    let order = given(&params.order)
        .map(|v| v.parse::<PlayerOrder>().map_err(invalid("order")))
        .transpose()?;

    Ok(PlayerQuery {
        criteria,
        order,
        page: PageRequest::new(
            parsed(&params.page_number, "pageNumber")?,
            parsed(&params.page_size, "pageSize")?,
        ),
    })
}
