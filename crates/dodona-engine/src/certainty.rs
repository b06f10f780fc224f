use dodona_types::Region;
use serde::Serialize;

use crate::share::{shares, Share};

/// How securely the inscriptions are attributed to Thessalian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CertaintySplit {
    pub certain: u32,
    pub uncertain: u32,
    pub name_only: u32,
}

impl CertaintySplit {
    pub fn total(&self) -> u32 {
        self.certain + self.uncertain + self.name_only
    }

    pub fn shares(&self) -> Vec<Share> {
        shares([
            ("Certain", self.certain),
            ("Uncertain", self.uncertain),
            ("Name / alphabet only", self.name_only),
        ])
    }
}

pub fn certainty_split(regions: &[Region]) -> CertaintySplit {
    regions
        .iter()
        .fold(CertaintySplit::default(), |acc, r| CertaintySplit {
            certain: acc.certain + r.certain_count,
            uncertain: acc.uncertain + r.uncertain_count,
            name_only: acc.name_only + r.name_only_count,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dodona_core::dataset;

    #[test]
    fn test_split_sums_to_known_total() {
        let data = dataset();
        let split = certainty_split(&data.regions);
        assert_eq!(split.total(), data.totals.thessalian);
        assert_eq!(split.total(), 81);
    }

    #[test]
    fn test_split_values() {
        let split = certainty_split(&dataset().regions);
        insta::assert_json_snapshot!(split, @r###"
        {
          "certain": 54,
          "uncertain": 25,
          "name_only": 2
        }
        "###);
    }

    #[test]
    fn test_split_of_no_regions_is_zero() {
        let split = certainty_split(&[]);
        assert_eq!(split, CertaintySplit::default());
        assert!(split.shares().iter().all(|s| s.percent_share == 0.0));
    }
}
