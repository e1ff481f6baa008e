//! Closed vocabulary types shared by the domain and the wire format.

mod profession;
mod race;

pub use profession::Profession;
pub use race::Race;
