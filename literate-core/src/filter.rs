//! Search and favorites filtering over a book collection

use crate::types::Book;
use serde::{Deserialize, Serialize};

/// Predicate combining a free-text query with the favorites-only toggle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFilter {
    /// Case-insensitive substring matched against title and author
    pub query: Option<String>,

    /// Keep only books flagged as favorites
    pub favorites_only: bool,
}

impl BookFilter {
    /// A filter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    /// Whether any predicate is active
    pub fn is_active(&self) -> bool {
        self.favorites_only || self.needle().is_some()
    }

    /// Lowercased query, or `None` when there is nothing to match
    fn needle(&self) -> Option<String> {
        self.query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Test a single book
    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.needle();
        self.matches_with(book, needle.as_deref())
    }

    fn matches_with(&self, book: &Book, needle: Option<&str>) -> bool {
        if self.favorites_only && !book.is_favorite {
            return false;
        }
        match needle {
            Some(needle) => {
                book.title.to_lowercase().contains(needle)
                    || book.author.to_lowercase().contains(needle)
            }
            None => true,
        }
    }

    /// Keep matching books, preserving their relative order
    pub fn apply<'a, I>(&self, books: I) -> Vec<&'a Book>
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let needle = self.needle();
        let matched: Vec<&Book> = books
            .into_iter()
            .filter(|book| self.matches_with(book, needle.as_deref()))
            .collect();
        tracing::trace!(filter = ?self, matched = matched.len(), "Applied filter");
        matched
    }
}
