use clap::ValueEnum;
use dodona_types::{RegionId, Tab, VowelCategory};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TabArg {
    Map,
    Profile,
    Vowels,
}

impl From<TabArg> for Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Map => Tab::Map,
            TabArg::Profile => Tab::Profile,
            TabArg::Vowels => Tab::Vowels,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RegionArg {
    General,
    Pelasgiotis,
    Histiaiotis,
    Thessaliotis,
    Phthiotis,
}

impl From<RegionArg> for RegionId {
    fn from(region: RegionArg) -> Self {
        match region {
            RegionArg::General => RegionId::General,
            RegionArg::Pelasgiotis => RegionId::Pelasgiotis,
            RegionArg::Histiaiotis => RegionId::Histiaiotis,
            RegionArg::Thessaliotis => RegionId::Thessaliotis,
            RegionArg::Phthiotis => RegionId::Phthiotis,
        }
    }
}

/// Vowel notation category, given on the command line by its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    #[value(name = "1", help = "⟨ΕΙ⟩ ⟨ΟΥ⟩ without ⟨Η⟩ ⟨Ω⟩")]
    Digraphs,
    #[value(name = "2", help = "⟨ΕΙ⟩ ⟨ΟΥ⟩ alongside ⟨Η⟩ ⟨Ω⟩")]
    Mixed,
    #[value(name = "3", help = "⟨Η⟩ ⟨Ω⟩ without ⟨ΕΙ⟩ ⟨ΟΥ⟩")]
    EtaOmega,
}

impl From<CategoryArg> for VowelCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Digraphs => VowelCategory::Digraphs,
            CategoryArg::Mixed => VowelCategory::Mixed,
            CategoryArg::EtaOmega => VowelCategory::EtaOmega,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
}
