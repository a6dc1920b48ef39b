use serde::{Deserialize, Serialize};

use super::Dimension;

/// Sales region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Dimension for Region {
    const COLUMN: &'static str = "Region";
    const VALUES: &'static [Self] = &[Region::North, Region::South, Region::East, Region::West];

    fn label(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
