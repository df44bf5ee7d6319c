//! CLI command implementations

mod list;
mod map;
mod region;
mod share;
mod shell;
mod show;

pub use list::list;
pub use map::map;
pub use region::region;
pub use share::share;
pub use shell::shell;
pub use show::show;

use literate_core::{BookFilter, BookId, BookStore};
use std::str::FromStr;

/// How a command names a book: by id or by 1-based position in the section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Id(BookId),
    Position(usize),
}

impl Selector {
    /// The id of the selected book, if it is in `store`
    pub fn resolve(&self, store: &BookStore) -> Option<BookId> {
        match self {
            Selector::Id(id) => store.get(*id).map(|b| b.id()),
            Selector::Position(n) => store.nth(*n).map(|b| b.id()),
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Ok(Selector::Position(n));
        }
        s.parse::<BookId>()
            .map(Selector::Id)
            .map_err(|_| format!("'{}' is neither a position nor a book id", s))
    }
}

/// Build a filter from the shared `--search` / `--favorites` flags
pub fn filter_from(search: Option<String>, favorites: bool) -> BookFilter {
    let filter = BookFilter::new().favorites_only(favorites);
    match search {
        Some(query) => filter.with_query(query),
        None => filter,
    }
}
