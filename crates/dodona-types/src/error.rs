use std::fmt;

/// Result type for dodona-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when parsing identifiers at the input boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Region identifier not among the known tétradas
    UnknownRegion(String),

    /// Tab name outside {map, profile, vowels}
    UnknownTab(String),

    /// Vowel notation category outside 1..=3
    UnknownCategory(String),

    /// Corpus abbreviation other than DVC / Lhôte
    UnknownCorpus(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownRegion(id) => write!(
                f,
                "Unknown region '{}' (expected one of: general, pelasgiotis, histiaiotis, thessaliotis, phthiotis)",
                id
            ),
            Error::UnknownTab(tab) => write!(
                f,
                "Unknown tab '{}' (expected one of: map, profile, vowels)",
                tab
            ),
            Error::UnknownCategory(cat) => {
                write!(f, "Unknown vowel notation category '{}' (expected 1, 2 or 3)", cat)
            }
            Error::UnknownCorpus(corpus) => {
                write!(f, "Unknown corpus '{}' (expected DVC or Lhôte)", corpus)
            }
        }
    }
}

impl std::error::Error for Error {}
