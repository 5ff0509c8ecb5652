use crate::args::OutputFormat;
use crate::presentation::presenters::build_experience_rows;
use crate::presentation::renderers::console::{self, ConsoleOptions};
use anyhow::Result;
use folio_types::Catalog;
use is_terminal::IsTerminal;

pub fn handle(catalog: Catalog, format: OutputFormat) -> Result<()> {
    let rows = build_experience_rows(&catalog);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            let options = ConsoleOptions {
                enable_color: std::io::stdout().is_terminal(),
            };
            console::render_experience(&rows, options);
        }
    }
    Ok(())
}
