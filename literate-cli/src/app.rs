//! Application state shared by every command

use literate_core::cover::{AssetDirResolver, NoCovers};
use literate_core::{resolve_cover, Book, BookStore, Catalog, Cover, CoverResolver, Section};
use std::path::PathBuf;

/// The catalog plus the presentation choices made on the command line
pub struct App {
    pub catalog: Catalog,
    pub section: Section,
    covers: Box<dyn CoverResolver>,
}

impl App {
    /// Start from the sample catalog
    pub fn new(section: Section, covers: Option<PathBuf>) -> Self {
        let covers: Box<dyn CoverResolver> = match covers {
            Some(dir) => {
                tracing::debug!("Resolving covers from {}", dir.display());
                Box::new(AssetDirResolver::new(dir))
            }
            None => Box::new(NoCovers),
        };
        Self {
            catalog: Catalog::sample(),
            section,
            covers,
        }
    }

    /// The store for the current section
    pub fn store(&self) -> &BookStore {
        self.catalog.section(self.section)
    }

    pub fn store_mut(&mut self) -> &mut BookStore {
        self.catalog.section_mut(self.section)
    }

    pub fn cover(&self, book: &Book) -> Cover {
        resolve_cover(book, &*self.covers)
    }
}
