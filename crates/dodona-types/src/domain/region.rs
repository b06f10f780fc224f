use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Identifier of a regional bucket of the corpus.
///
/// Four of these are the traditional tétradas of Thessaly. `General` holds the
/// inscriptions without a regional attribution and is not drawn on the map;
/// `Phthiotis` is drawn on the map but has no inscriptions in this corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionId {
    General,
    Pelasgiotis,
    Histiaiotis,
    Thessaliotis,
    Phthiotis,
}

impl RegionId {
    pub const ALL: [RegionId; 5] = [
        RegionId::General,
        RegionId::Pelasgiotis,
        RegionId::Histiaiotis,
        RegionId::Thessaliotis,
        RegionId::Phthiotis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionId::General => "general",
            RegionId::Pelasgiotis => "pelasgiotis",
            RegionId::Histiaiotis => "histiaiotis",
            RegionId::Thessaliotis => "thessaliotis",
            RegionId::Phthiotis => "phthiotis",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        RegionId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| Error::UnknownRegion(s.to_string()))
    }
}

/// One regional bucket with its inscription counts.
///
/// `count` is expected to equal both `certain + uncertain + name_only` and
/// `period_v + period_transition + no_date`; the dataset validator checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: RegionId,
    pub display_name: &'static str,
    pub short_name: &'static str,
    pub english_name: &'static str,
    pub count: u32,
    pub certain_count: u32,
    pub uncertain_count: u32,
    pub name_only_count: u32,
    pub period_v_count: u32,
    pub period_transition_count: u32,
    pub no_date_count: u32,
}

impl Region {
    pub fn certainty_total(&self) -> u32 {
        self.certain_count + self.uncertain_count + self.name_only_count
    }

    pub fn chronology_total(&self) -> u32 {
        self.period_v_count + self.period_transition_count + self.no_date_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_id_parses_case_insensitively() {
        assert_eq!("Pelasgiotis".parse::<RegionId>(), Ok(RegionId::Pelasgiotis));
        assert_eq!(" phthiotis ".parse::<RegionId>(), Ok(RegionId::Phthiotis));
    }

    #[test]
    fn test_region_id_rejects_unknown() {
        let err = "magnesia".parse::<RegionId>().unwrap_err();
        assert_eq!(err, Error::UnknownRegion("magnesia".to_string()));
        assert!(err.to_string().contains("magnesia"));
    }

    #[test]
    fn test_region_id_display_round_trips() {
        for id in RegionId::ALL {
            assert_eq!(id.to_string().parse::<RegionId>(), Ok(id));
        }
    }

    #[test]
    fn test_region_id_serializes_lowercase() {
        let json = serde_json::to_string(&RegionId::Histiaiotis).unwrap();
        assert_eq!(json, "\"histiaiotis\"");
    }
}
