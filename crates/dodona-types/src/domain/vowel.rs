use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::RegionId;
use crate::Error;

/// Reference corpus an inscription identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Corpus {
    #[serde(rename = "DVC")]
    Dvc,
    #[serde(rename = "Lhôte")]
    Lhote,
}

impl Corpus {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Corpus::Dvc => "DVC",
            Corpus::Lhote => "Lhôte",
        }
    }

    /// Full series name used in citations.
    pub fn series_name(&self) -> &'static str {
        match self {
            Corpus::Dvc => "I. Dodone DVC",
            Corpus::Lhote => "I. Dodone Lhôte",
        }
    }
}

impl FromStr for Corpus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "DVC" | "dvc" => Ok(Corpus::Dvc),
            "Lhôte" | "lhôte" | "Lhote" | "lhote" => Ok(Corpus::Lhote),
            _ => Err(Error::UnknownCorpus(s.to_string())),
        }
    }
}

/// One physical inscription in one corpus. Ids are only unique per corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceReference {
    pub corpus: Corpus,
    pub inscription_id: &'static str,
}

impl SourceReference {
    pub const fn dvc(inscription_id: &'static str) -> Self {
        Self {
            corpus: Corpus::Dvc,
            inscription_id,
        }
    }

    pub const fn lhote(inscription_id: &'static str) -> Self {
        Self {
            corpus: Corpus::Lhote,
            inscription_id,
        }
    }

    pub fn citation(&self) -> String {
        format!("{} {}", self.corpus.series_name(), self.inscription_id)
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.corpus.series_name(), self.inscription_id)
    }
}

/// Spelling convention used for the inherited mid-long vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum VowelCategory {
    /// ⟨ΕΙ⟩ ⟨ΟΥ⟩ without ⟨Η⟩ ⟨Ω⟩
    Digraphs,
    /// ⟨ΕΙ⟩ ⟨ΟΥ⟩ alongside ⟨Η⟩ ⟨Ω⟩
    Mixed,
    /// ⟨Η⟩ ⟨Ω⟩ without ⟨ΕΙ⟩ ⟨ΟΥ⟩
    EtaOmega,
}

impl VowelCategory {
    pub const ALL: [VowelCategory; 3] = [
        VowelCategory::Digraphs,
        VowelCategory::Mixed,
        VowelCategory::EtaOmega,
    ];

    pub fn number(&self) -> u8 {
        match self {
            VowelCategory::Digraphs => 1,
            VowelCategory::Mixed => 2,
            VowelCategory::EtaOmega => 3,
        }
    }

    /// Compact badge used in the inscription table.
    pub fn badge(&self) -> &'static str {
        match self {
            VowelCategory::Digraphs => "ΕΙ/ΟΥ",
            VowelCategory::Mixed => "Mixed",
            VowelCategory::EtaOmega => "Η/Ω",
        }
    }
}

impl From<VowelCategory> for u8 {
    fn from(category: VowelCategory) -> Self {
        category.number()
    }
}

impl TryFrom<u8> for VowelCategory {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VowelCategory::Digraphs),
            2 => Ok(VowelCategory::Mixed),
            3 => Ok(VowelCategory::EtaOmega),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

impl FromStr for VowelCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::UnknownCategory(s.to_string()))?;
        VowelCategory::try_from(number).map_err(|_| Error::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for VowelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VowelNotationCategory {
    pub category: VowelCategory,
    pub label: &'static str,
    pub count: u32,
    pub description: &'static str,
    pub color_token: &'static str,
    pub source_references: Vec<SourceReference>,
}

/// Where an inscription's author came from, as far as it can be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InscriptionRegion {
    pub region: Option<RegionId>,
    pub uncertain: bool,
}

impl InscriptionRegion {
    pub const UNKNOWN: InscriptionRegion = InscriptionRegion {
        region: None,
        uncertain: false,
    };

    pub const fn certain(region: RegionId) -> Self {
        Self {
            region: Some(region),
            uncertain: false,
        }
    }

    pub const fn probable(region: RegionId) -> Self {
        Self {
            region: Some(region),
            uncertain: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InscriptionExample {
    pub source_reference: SourceReference,
    pub category: VowelCategory,
    pub date: &'static str,
    pub region: InscriptionRegion,
    pub notable_forms: &'static str,
}

/// Spelling of one etymological vowel source across three alphabet stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrthographyRow {
    pub etymon: &'static str,
    pub archaic: &'static str,
    pub reformed: &'static str,
    pub attic: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VowelTheory {
    pub author: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_uses_series_name() {
        assert_eq!(SourceReference::dvc("31A").citation(), "I. Dodone DVC 31A");
        assert_eq!(SourceReference::lhote("8B").to_string(), "I. Dodone Lhôte 8B");
    }

    #[test]
    fn test_category_conversions() {
        assert_eq!(VowelCategory::try_from(2), Ok(VowelCategory::Mixed));
        assert!(VowelCategory::try_from(4).is_err());
        assert_eq!("3".parse::<VowelCategory>(), Ok(VowelCategory::EtaOmega));
        assert!("three".parse::<VowelCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_as_number() {
        let json = serde_json::to_string(&VowelCategory::EtaOmega).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn test_corpus_parse_accepts_ascii_spelling() {
        assert_eq!("Lhote".parse::<Corpus>(), Ok(Corpus::Lhote));
        assert_eq!("DVC".parse::<Corpus>(), Ok(Corpus::Dvc));
    }
}
