//! The Book record and its identifier

use super::Location;
use crate::error::LiterateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique identifier for a book record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for BookId {
    type Err = LiterateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| LiterateError::InvalidId(s.to_string()))
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, fixed for the lifetime of the record
    id: BookId,

    pub title: String,

    pub author: String,

    pub description: String,

    pub is_favorite: bool,

    pub is_read: bool,

    /// Cover reference, resolved to an image by a [`crate::cover::CoverResolver`]
    pub cover: Option<String>,

    /// Where the book can be found; unlocated books are left off the map
    pub location: Option<Location>,

    /// Seller's note on a listing, e.g. "Like new"
    #[serde(default)]
    pub condition: Option<String>,
}

impl Book {
    /// Create a new book with a fresh id and both flags cleared
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            description: String::new(),
            is_favorite: false,
            is_read: false,
            cover: None,
            location: None,
            condition: None,
        }
    }

    /// Use a caller-supplied id instead of the generated one
    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = id;
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the cover reference
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the listing condition
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    /// Text handed to the platform share sheet
    pub fn share_text(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }

    /// Only the store re-keys records, to keep ids unique
    pub(crate) fn set_id(&mut self, id: BookId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_defaults() {
        let book = Book::new("Clean Code", "Robert C. Martin");
        assert_eq!(book.title, "Clean Code");
        assert_eq!(book.author, "Robert C. Martin");
        assert!(book.description.is_empty());
        assert!(!book.is_favorite);
        assert!(!book.is_read);
        assert!(book.cover.is_none());
        assert!(book.location.is_none());
        assert!(book.condition.is_none());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Book::new("A", "X");
        let b = Book::new("A", "X");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_share_text() {
        let book = Book::new("Design Patterns", "Erich Gamma et al.");
        assert_eq!(book.share_text(), "Design Patterns by Erich Gamma et al.");
    }

    #[test]
    fn test_book_id_parse() {
        let id = BookId::new();
        let parsed: BookId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);

        let err = "not-a-uuid".parse::<BookId>().unwrap_err();
        assert_eq!(err, LiterateError::InvalidId("not-a-uuid".to_string()));
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Serialization Test", "Tester")
            .with_cover("cover")
            .with_location(Location::new(1.0, 2.0));
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["id"], book.id().to_string());

        let deserialized: Book = serde_json::from_value(json).unwrap();
        assert_eq!(book, deserialized);
    }

    #[test]
    fn test_condition_is_optional_in_json() {
        let book = Book::new("Clean Code", "Robert C. Martin").with_condition("Like new");
        let mut json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["condition"], "Like new");

        json.as_object_mut().unwrap().remove("condition");
        let deserialized: Book = serde_json::from_value(json).unwrap();
        assert!(deserialized.condition.is_none());
    }
}
