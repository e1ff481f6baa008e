//! Player listing pipeline: filter, then sort, then paginate.
//!
//! Counting uses only the filter stage.

mod criteria;
mod order;
mod page;

#[cfg(test)]
pub(crate) mod test_support;

pub use criteria::{filter, PlayerCriteria};
pub use order::{sort, PlayerOrder};
pub use page::{paginate, PageRequest, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

use crate::Player;

/// Run the full listing pipeline over `players`.
pub fn select(
    players: Vec<Player>,
    criteria: &PlayerCriteria,
    order: Option<PlayerOrder>,
    page: PageRequest,
) -> Vec<Player> {
    paginate(sort(filter(players, criteria), order), page)
}
