use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use anyhow::{Context, Result};
use folio_types::Catalog;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let catalog = load_catalog(&cli, &config)?;

    match cli.command {
        None | Some(Commands::View) => handlers::view::handle(catalog, &config),

        Some(Commands::Projects { category }) => {
            handlers::projects::handle(catalog, category.as_deref(), cli.format)
        }

        Some(Commands::Skills) => handlers::skills::handle(catalog, cli.format),

        Some(Commands::Experience) => handlers::experience::handle(catalog, cli.format),

        Some(Commands::Contact) => handlers::contact::handle(catalog, cli.format),

        Some(Commands::Catalog { dump: _ }) => handlers::catalog_dump::handle(catalog),
    }
}

/// Catalog resolution: --catalog flag, then the config's default catalog,
/// then the built-in content.
fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path = cli.catalog.as_ref().or(config.catalog.as_ref());
    match path {
        Some(path) => Catalog::load_from(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}
