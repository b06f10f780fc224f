use serde::Serialize;

/// Inscriptions dated to one labeled period. Buckets are ordered by period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChronologyBucket {
    pub period_label: &'static str,
    pub inscription_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeBucket {
    pub theme_name: &'static str,
    pub inscription_count: u32,
    /// Consultations whose topic cannot be determined
    pub unknown: bool,
}

/// Size of one dialect group among the dialect-classified inscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialectShare {
    pub dialect_name: &'static str,
    pub inscription_count: u32,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlphabetShare {
    pub alphabet_name: &'static str,
    pub inscription_count: u32,
}
