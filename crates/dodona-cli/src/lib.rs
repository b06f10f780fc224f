// NOTE: Layering
//
// dodona-types    closed domain types (ids, tabs, records)
// dodona-core     the compiled-in tables and their validation
// dodona-engine   pure derived views (shares, splits, citations, tooltips)
// dodona-runtime  the dashboard session (selection state, config)
// dodona (this)   clap commands, presenters, console and TUI renderers
//
// The dataset never changes at runtime, so every screen and command is a
// pure function of (dataset, selection state). Nothing is cached; views are
// derived again on every draw.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
