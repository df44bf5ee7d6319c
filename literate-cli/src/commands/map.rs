//! Map command implementation

use crate::app::App;
use crate::render;
use anyhow::Result;

/// Print one marker per located book
pub fn map(app: &App, json: bool) -> Result<()> {
    let markers = app.store().annotations();

    if json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
    } else {
        render::annotations(&mut std::io::stdout().lock(), &markers)?;
    }

    Ok(())
}
