//! The book store: an ordered, observable in-memory collection
//!
//! Every mutation is addressed by [`BookId`]. A missing id is never an error;
//! the operation does nothing and reports that through its return value.
//! Effective mutations are published to subscribers as [`StoreEvent`]s.

use crate::filter::BookFilter;
use crate::map::{annotations, MapAnnotation};
use crate::region::fit_region;
use crate::types::{Book, BookId, Region};
use std::fmt;
use tokio::sync::broadcast;

/// Buffered events per subscriber before the slowest one starts lagging
const EVENT_CAPACITY: usize = 64;

/// Change notifications published by a [`BookStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A book was inserted at the front
    Added { id: BookId, title: String },

    /// The favorite flag changed
    FavoriteToggled { id: BookId, is_favorite: bool },

    /// The read flag changed
    ReadToggled { id: BookId, is_read: bool },

    /// Fields were edited in place
    Updated { id: BookId },

    /// A book was removed
    Deleted { id: BookId, title: String },
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::Added { title, .. } => write!(f, "added \"{}\"", title),
            StoreEvent::FavoriteToggled { id, is_favorite } => {
                let what = if *is_favorite { "favorited" } else { "unfavorited" };
                write!(f, "{} {}", what, id)
            }
            StoreEvent::ReadToggled { id, is_read } => {
                let what = if *is_read { "marked read" } else { "marked unread" };
                write!(f, "{} {}", what, id)
            }
            StoreEvent::Updated { id } => write!(f, "updated {}", id),
            StoreEvent::Deleted { title, .. } => write!(f, "deleted \"{}\"", title),
        }
    }
}

/// Ordered collection of books, most recently added first
#[derive(Debug)]
pub struct BookStore {
    books: Vec<Book>,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            books: Vec::new(),
            events,
        }
    }

    /// Create a store holding `books` in the given order.
    ///
    /// Later records whose id repeats an earlier one are re-keyed.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut store = Self::new();
        for mut book in books {
            if store.position(book.id()).is_some() {
                book.set_id(BookId::new());
            }
            store.books.push(book);
        }
        store
    }

    /// Receive every subsequent change notification
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: StoreEvent) {
        tracing::debug!(%event, "Store changed");
        // Ignore errors (no subscribers)
        let _ = self.events.send(event);
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id() == id)
    }

    /// Books in display order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// Look up by 1-based display position
    pub fn nth(&self, position: usize) -> Option<&Book> {
        position.checked_sub(1).and_then(|i| self.books.get(i))
    }

    /// Books matching the filter, in display order
    pub fn filtered(&self, filter: &BookFilter) -> Vec<&Book> {
        filter.apply(&self.books)
    }

    /// Viewport framing every located book
    pub fn region(&self) -> Option<Region> {
        fit_region(&self.books)
    }

    /// Map markers for every located book
    pub fn annotations(&self) -> Vec<MapAnnotation> {
        annotations(&self.books)
    }

    /// Insert at the front and return the id the record ended up with.
    ///
    /// A record reusing an id already in the store gets a fresh one.
    pub fn add(&mut self, mut book: Book) -> BookId {
        if self.position(book.id()).is_some() {
            tracing::debug!(id = %book.id(), "Duplicate id on add, assigning a fresh one");
            book.set_id(BookId::new());
        }
        let id = book.id();
        let title = book.title.clone();
        self.books.insert(0, book);
        self.publish(StoreEvent::Added { id, title });
        id
    }

    /// Insert the placeholder record used by the "Add Sample Book" action
    pub fn add_sample(&mut self) -> BookId {
        self.add(
            Book::new("New Book", "Unknown Author")
                .with_description("A newly added sample book for demonstration."),
        )
    }

    /// Flip the favorite flag, returning the new value
    pub fn toggle_favorite(&mut self, id: BookId) -> Option<bool> {
        let book = self.books.iter_mut().find(|b| b.id() == id)?;
        book.is_favorite = !book.is_favorite;
        let is_favorite = book.is_favorite;
        self.publish(StoreEvent::FavoriteToggled { id, is_favorite });
        Some(is_favorite)
    }

    /// Flip the read flag, returning the new value
    pub fn toggle_read(&mut self, id: BookId) -> Option<bool> {
        let book = self.books.iter_mut().find(|b| b.id() == id)?;
        book.is_read = !book.is_read;
        let is_read = book.is_read;
        self.publish(StoreEvent::ReadToggled { id, is_read });
        Some(is_read)
    }

    /// Edit a record in place. Returns whether the id was found.
    ///
    /// The record keeps its id even if `edit` replaces the whole value.
    pub fn update<F>(&mut self, id: BookId, edit: F) -> bool
    where
        F: FnOnce(&mut Book),
    {
        let Some(book) = self.books.iter_mut().find(|b| b.id() == id) else {
            return false;
        };
        edit(book);
        book.set_id(id);
        self.publish(StoreEvent::Updated { id });
        true
    }

    /// Remove a record, handing it back to the caller
    pub fn delete(&mut self, id: BookId) -> Option<Book> {
        let index = self.position(id)?;
        let book = self.books.remove(index);
        self.publish(StoreEvent::Deleted {
            id,
            title: book.title.clone(),
        });
        Some(book)
    }
}

impl<'a> IntoIterator for &'a BookStore {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
