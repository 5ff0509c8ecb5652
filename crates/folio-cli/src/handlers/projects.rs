use crate::args::OutputFormat;
use crate::presentation::presenters::build_project_cards;
use crate::presentation::renderers::console::{self, ConsoleOptions};
use anyhow::Result;
use folio_engine::{Controller, Filter, ViewEvent};
use folio_types::Catalog;
use is_terminal::IsTerminal;

pub fn handle(catalog: Catalog, category: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut controller = Controller::new(catalog);
    if let Some(token) = category {
        // Tokens are accepted as-is; unknown ones derive an empty list.
        controller.apply(ViewEvent::FilterChanged(Filter::from_token(token)));
    }

    let cards = build_project_cards(
        &controller.visible_projects(),
        controller.active_project(),
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        OutputFormat::Text => {
            let options = ConsoleOptions {
                enable_color: std::io::stdout().is_terminal(),
            };
            console::render_projects(&cards, options);
        }
    }
    Ok(())
}
