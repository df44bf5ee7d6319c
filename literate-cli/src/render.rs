//! Plain-text rendering of catalog values

use literate_core::cover::PLACEHOLDER_SYMBOL;
use literate_core::{Book, BookFilter, BookStore, Cover, ImageHandle, MapAnnotation, Region};
use std::io::{self, Write};

/// Numbered list of the books matching `filter`.
///
/// Numbers are positions in the whole store so they stay valid selectors
/// while a filter is active.
pub fn book_list(out: &mut dyn Write, store: &BookStore, filter: &BookFilter) -> io::Result<()> {
    let mut shown = 0;
    for (i, book) in store.iter().enumerate() {
        if !filter.matches(book) {
            continue;
        }
        shown += 1;
        write!(out, "{:>3}. {} - {}", i + 1, book.title, book.author)?;
        if book.is_favorite {
            write!(out, "  [favorite]")?;
        }
        if book.is_read {
            write!(out, "  [read]")?;
        }
        writeln!(out)?;
    }
    if shown == 0 {
        writeln!(out, "No books")?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn cover_label(cover: &Cover) -> String {
    match cover {
        Cover::Asset(ImageHandle::Path(path)) => path.display().to_string(),
        Cover::Asset(ImageHandle::Named(name)) => name.clone(),
        Cover::Placeholder => format!("placeholder ({})", PLACEHOLDER_SYMBOL),
    }
}

pub fn book_detail(out: &mut dyn Write, book: &Book, cover: &Cover) -> io::Result<()> {
    writeln!(out, "Title:       {}", book.title)?;
    writeln!(out, "Author:      {}", book.author)?;
    writeln!(out, "Id:          {}", book.id())?;
    writeln!(out, "Favorite:    {}", yes_no(book.is_favorite))?;
    writeln!(out, "Read:        {}", yes_no(book.is_read))?;
    writeln!(out, "Cover:       {}", cover_label(cover))?;
    if let Some(condition) = &book.condition {
        writeln!(out, "Condition:   {}", condition)?;
    }
    match book.location {
        Some(loc) => writeln!(out, "Location:    {:.4}, {:.4}", loc.latitude, loc.longitude)?,
        None => writeln!(out, "Location:    none")?,
    }
    if !book.description.is_empty() {
        writeln!(out, "Description: {}", book.description)?;
    }
    Ok(())
}

pub fn region(out: &mut dyn Write, region: &Region) -> io::Result<()> {
    writeln!(
        out,
        "Center: {:.4}, {:.4}",
        region.center.latitude, region.center.longitude
    )?;
    writeln!(
        out,
        "Span:   {:.4} x {:.4}",
        region.span.latitude_delta, region.span.longitude_delta
    )
}

pub fn annotations(out: &mut dyn Write, markers: &[MapAnnotation]) -> io::Result<()> {
    if markers.is_empty() {
        return writeln!(out, "No located books");
    }
    for marker in markers {
        writeln!(
            out,
            "{} @ {:.4}, {:.4}",
            marker.title, marker.location.latitude, marker.location.longitude
        )?;
    }
    Ok(())
}
