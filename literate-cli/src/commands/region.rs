//! Region command implementation

use crate::app::App;
use crate::render;
use anyhow::Result;
use literate_core::{fit_region, BookFilter};

/// Print the viewport framing the located books that match `filter`
pub fn region(app: &App, filter: &BookFilter, json: bool) -> Result<()> {
    let books = app.store().filtered(filter);
    let region = fit_region(books.iter().copied());

    if json {
        println!("{}", serde_json::to_string_pretty(&region)?);
        return Ok(());
    }

    match region {
        Some(region) => render::region(&mut std::io::stdout().lock(), &region)?,
        None => println!("No located books"),
    }

    Ok(())
}
