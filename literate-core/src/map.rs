//! Map markers for located books

use crate::types::{Book, BookId, Location};
use serde::{Deserialize, Serialize};

/// A marker the map collaborator places for one book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapAnnotation {
    pub id: BookId,
    pub title: String,
    pub location: Location,
    pub cover: Option<String>,
}

impl MapAnnotation {
    /// `None` for a book without a location
    pub fn for_book(book: &Book) -> Option<Self> {
        book.location.map(|location| Self {
            id: book.id(),
            title: book.title.clone(),
            location,
            cover: book.cover.clone(),
        })
    }
}

/// One annotation per located book, in collection order
pub fn annotations<'a, I>(books: I) -> Vec<MapAnnotation>
where
    I: IntoIterator<Item = &'a Book>,
{
    books.into_iter().filter_map(MapAnnotation::for_book).collect()
}
