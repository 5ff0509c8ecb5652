use crate::args::OutputFormat;
use crate::presentation::presenters::build_skill_badges;
use crate::presentation::renderers::console::{self, ConsoleOptions};
use anyhow::Result;
use folio_engine::Controller;
use folio_types::Catalog;
use is_terminal::IsTerminal;

pub fn handle(catalog: Catalog, format: OutputFormat) -> Result<()> {
    let controller = Controller::new(catalog);
    let badges = build_skill_badges(controller.catalog(), controller.active_skill());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&badges)?);
        }
        OutputFormat::Text => {
            let options = ConsoleOptions {
                enable_color: std::io::stdout().is_terminal(),
            };
            console::render_skills(&badges, options);
        }
    }
    Ok(())
}
