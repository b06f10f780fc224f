use super::args::{Cli, Commands, ConfigCommand, OutputFormat, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogSink};
use anyhow::Result;
use dodona_runtime::{Config, Dashboard, resolve_config_path};
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    let command = cli.command.unwrap_or(Commands::Dashboard { tab: None });

    let level = logging::resolve_level(
        cli.log_level.map(|l| l.to_string()),
        config.log_level.as_deref(),
    );
    let sink = match (&command, &config.log_file) {
        (Commands::Dashboard { .. }, Some(path)) => LogSink::File(path.as_path()),
        (Commands::Dashboard { .. }, None) => LogSink::Discard,
        _ => LogSink::Stderr,
    };
    logging::init(&level, sink)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let color = !cli.no_color
        && config.color
        && cli.format == OutputFormat::Plain
        && std::io::stdout().is_terminal();
    let ctx = |view_mode: &ViewModeArgs| HandlerContext::new(cli.format, view_mode, color);
    let default_mode = ViewModeArgs::default();

    match command {
        Commands::Dashboard { tab } => {
            let mut dashboard = Dashboard::open(&config)?;
            if let Some(tab) = tab {
                dashboard.set_active_tab(tab.into());
            }
            handlers::dashboard::handle(dashboard, &config)
        }

        Commands::Summary => {
            let dashboard = Dashboard::open(&config)?;
            handlers::summary::handle(&dashboard, &ctx(&default_mode))
        }

        Commands::Regions { view_mode } => {
            let dashboard = Dashboard::open(&config)?;
            handlers::regions::handle(&dashboard, &ctx(&view_mode))
        }

        Commands::Region { id } => {
            let dashboard = Dashboard::open(&config)?;
            handlers::region::handle(&dashboard, id.into(), &ctx(&default_mode))
        }

        Commands::Profile { view_mode } => {
            let dashboard = Dashboard::open(&config)?;
            handlers::profile::handle(&dashboard, &ctx(&view_mode))
        }

        Commands::Vowels {
            category,
            view_mode,
        } => {
            let dashboard = Dashboard::open(&config)?;
            handlers::vowels::handle(&dashboard, category.map(Into::into), &ctx(&view_mode))
        }

        Commands::Inscriptions {
            category,
            region,
            export,
            view_mode,
        } => {
            let dashboard = Dashboard::open(&config)?;
            handlers::inscriptions::handle(
                &dashboard,
                category.map(Into::into),
                region.map(Into::into),
                export,
                &ctx(&view_mode),
            )
        }

        // Reports issues instead of refusing to start on them.
        Commands::Validate => handlers::validate::handle(&ctx(&default_mode)),

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                handlers::config::show(&config_path, &config, &ctx(&default_mode))
            }
            ConfigCommand::Path => handlers::config::path(&config_path, &ctx(&default_mode)),
            ConfigCommand::Init { force } => {
                handlers::config::init(&config_path, force, &ctx(&default_mode))
            }
        },
    }
}
