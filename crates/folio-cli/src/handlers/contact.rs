use crate::args::OutputFormat;
use crate::presentation::presenters::build_contact;
use crate::presentation::renderers::console::{self, ConsoleOptions};
use anyhow::Result;
use folio_types::Catalog;
use is_terminal::IsTerminal;

pub fn handle(catalog: Catalog, format: OutputFormat) -> Result<()> {
    let contact = build_contact(&catalog.profile);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&contact)?);
        }
        OutputFormat::Text => {
            let options = ConsoleOptions {
                enable_color: std::io::stdout().is_terminal(),
            };
            console::render_contact(&contact, options);
        }
    }
    Ok(())
}
