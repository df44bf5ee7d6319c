//! Share command implementation

use super::Selector;
use crate::app::App;
use anyhow::{Context, Result};

/// Print the text handed to the share sheet
pub fn share(app: &App, selector: &Selector) -> Result<()> {
    let store = app.store();
    let book = selector
        .resolve(store)
        .and_then(|id| store.get(id))
        .with_context(|| format!("No such book in {}", app.section))?;

    println!("{}", book.share_text());
    Ok(())
}
