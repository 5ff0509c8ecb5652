use crate::config::Config;
use crate::presentation::renderers::tui;
use anyhow::Result;
use folio_types::Catalog;

pub fn handle(catalog: Catalog, config: &Config) -> Result<()> {
    tui::run(catalog, config)
}
