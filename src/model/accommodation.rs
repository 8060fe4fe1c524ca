use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where the visitor stays on Mars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Accommodation {
    #[default]
    #[serde(rename = "Space Hotel")]
    SpaceHotel,
    #[serde(rename = "Martian Base")]
    MartianBase,
}

static ALL_ACCOMMODATIONS: &[Accommodation] =
    &[Accommodation::SpaceHotel, Accommodation::MartianBase];

impl Accommodation {
    /// Returns the option text shown to the visitor and stored in the record.
    pub fn label(&self) -> &'static str {
        match self {
            Accommodation::SpaceHotel => "Space Hotel",
            Accommodation::MartianBase => "Martian Base",
        }
    }

    /// Returns all accommodation options in display order.
    pub fn all() -> &'static [Accommodation] {
        ALL_ACCOMMODATIONS
    }
}

#[mutants::skip]
impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Accommodation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.label() == s)
            .ok_or_else(|| s.to_string())
    }
}
