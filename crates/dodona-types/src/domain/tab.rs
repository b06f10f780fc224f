use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Top-level dashboard section. Only the active tab is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Map,
    Profile,
    Vowels,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Map, Tab::Profile, Tab::Vowels];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Map => "map",
            Tab::Profile => "profile",
            Tab::Vowels => "vowels",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Map => "Map / Regions",
            Tab::Profile => "Dialect profile",
            Tab::Vowels => "Vowels",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Map => 0,
            Tab::Profile => 1,
            Tab::Vowels => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "map" => Ok(Tab::Map),
            "profile" => Ok(Tab::Profile),
            "vowels" => Ok(Tab::Vowels),
            _ => Err(Error::UnknownTab(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycles_forward_and_back() {
        assert_eq!(Tab::Map.next(), Tab::Profile);
        assert_eq!(Tab::Vowels.next(), Tab::Map);
        assert_eq!(Tab::Map.previous(), Tab::Vowels);
        assert_eq!(Tab::Profile.previous(), Tab::Map);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("VOWELS".parse::<Tab>(), Ok(Tab::Vowels));
        assert!("timeline".parse::<Tab>().is_err());
    }

    #[test]
    fn test_default_tab_is_map() {
        assert_eq!(Tab::default(), Tab::Map);
    }
}
