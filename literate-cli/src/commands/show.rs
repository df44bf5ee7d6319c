//! Show command implementation

use super::Selector;
use crate::app::App;
use crate::render;
use anyhow::{Context, Result};
use literate_core::{Book, Cover};
use serde::Serialize;

/// Book detail output
#[derive(Serialize)]
struct BookDetail<'a> {
    #[serde(flatten)]
    book: &'a Book,
    resolved_cover: Cover,
    share_text: String,
}

/// Display the details of one book
pub fn show(app: &App, selector: &Selector, json: bool) -> Result<()> {
    let store = app.store();
    let book = selector
        .resolve(store)
        .and_then(|id| store.get(id))
        .with_context(|| format!("No such book in {}", app.section))?;
    let cover = app.cover(book);

    if json {
        let detail = BookDetail {
            book,
            resolved_cover: cover,
            share_text: book.share_text(),
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        render::book_detail(&mut std::io::stdout().lock(), book, &cover)?;
    }

    Ok(())
}
