//! List command implementation

use crate::app::App;
use crate::render;
use anyhow::Result;
use literate_core::BookFilter;

/// List the books of the current section that match `filter`
pub fn list(app: &App, filter: &BookFilter, json: bool) -> Result<()> {
    let store = app.store();
    tracing::debug!(section = %app.section, ?filter, "Listing books");

    if json {
        println!("{}", serde_json::to_string_pretty(&store.filtered(filter))?);
    } else {
        println!("{}", app.section);
        render::book_list(&mut std::io::stdout().lock(), store, filter)?;
    }

    Ok(())
}
