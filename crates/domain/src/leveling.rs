//! Level progression derived from experience.
//!
//! Level `L` is reached at `50 * L * (L + 1)` experience, so
//!
//! ```text
//! level          = floor((sqrt(2500 + 200 * experience) - 50) / 100)
//! untilNextLevel = 50 * (level + 1) * (level + 2) - experience
//! ```
//!
//! All arithmetic is integral. `200 * experience` reaches 2e9 at the
//! experience cap and is computed in `u64`.

use serde::{Deserialize, Serialize};

use crate::value_objects::Experience;

/// Level and remaining experience, always derived together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leveling {
    pub level: u32,
    pub until_next_level: u32,
}

impl Leveling {
    pub fn from_experience(experience: Experience) -> Self {
        let level = compute_level(experience);
        Self {
            level,
            until_next_level: compute_until_next(level, experience),
        }
    }
}

/// Level reached with the given experience.
pub fn compute_level(experience: Experience) -> u32 {
    let radicand = 2500 + 200 * u64::from(experience.points());
    // radicand >= 2500, so the root is at least 50
    let level = (integer_sqrt(radicand) - 50) / 100;
    level as u32
}

/// Experience still needed to advance past `level`.
///
/// Saturates at zero when `level` is lower than the one `experience`
/// actually reaches.
pub fn compute_until_next(level: u32, experience: Experience) -> u32 {
    let level = u64::from(level);
    let threshold = 50 * (level + 1) * (level + 2);
    threshold.saturating_sub(u64::from(experience.points())) as u32
}

fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
