//! Core data model for the book catalog

mod book;
mod location;

pub use book::{Book, BookId};
pub use location::{Location, Region, Span};
