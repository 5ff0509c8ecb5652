use anyhow::Result;
use folio_types::Catalog;

pub fn handle(catalog: Catalog) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
