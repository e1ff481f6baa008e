//! Value objects for the player domain

mod birthday;
mod experience;
mod names;

pub use birthday::{Birthday, EARLIEST_BIRTHDAY_MILLIS, LATEST_BIRTHDAY_MILLIS};
pub use experience::{Experience, MAX_EXPERIENCE};
pub use names::{PlayerName, PlayerTitle, MAX_NAME_LENGTH, MAX_TITLE_LENGTH};
