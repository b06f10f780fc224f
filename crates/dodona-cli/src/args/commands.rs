use super::common::ViewModeArgs;
use super::enums::{CategoryArg, ExportFormat, RegionArg, TabArg};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (default)")]
    Dashboard {
        #[arg(long, help = "Tab to open on (overrides the config file)")]
        tab: Option<TabArg>,
    },

    #[command(about = "Headline figures of the Thessalian corpus")]
    Summary,

    #[command(about = "Inscriptions per region with the attribution certainty split")]
    Regions {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Detail of one region")]
    Region {
        #[arg(help = "Region id")]
        id: RegionArg,
    },

    #[command(about = "Dialect profile: certainty, chronology, themes, alphabet, context")]
    Profile {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Notation of the mid-long vowels, by category")]
    Vowels {
        #[arg(long, help = "Only this category")]
        category: Option<CategoryArg>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Inscriptions with identifiable vowel notation")]
    Inscriptions {
        #[arg(long, help = "Only this vowel category")]
        category: Option<CategoryArg>,

        #[arg(long, help = "Only inscriptions attributed to this region")]
        region: Option<RegionArg>,

        #[arg(long, help = "Write the rows to stdout in this format")]
        export: Option<ExportFormat>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Check the consistency of the compiled-in dataset")]
    Validate,

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the effective configuration")]
    Show,

    #[command(about = "Print the config file path")]
    Path,

    #[command(about = "Write a default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
