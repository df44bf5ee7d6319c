//! The two-section catalog: public listings and the user's own library

use crate::error::LiterateError;
use crate::store::BookStore;
use crate::types::{Book, Location};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which store a view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Books offered nearby
    #[default]
    Listings,

    /// Books the user owns
    MyLibrary,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Listings, Section::MyLibrary];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Listings => "Listings",
            Section::MyLibrary => "My Library",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = LiterateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "listings" => Ok(Section::Listings),
            "library" | "my-library" | "my library" | "my_library" => Ok(Section::MyLibrary),
            _ => Err(LiterateError::UnknownSection(s.to_string())),
        }
    }
}

/// Both stores the application browses
#[derive(Debug, Default)]
pub struct Catalog {
    pub listings: BookStore,
    pub my_library: BookStore,
}

impl Catalog {
    pub fn new(listings: BookStore, my_library: BookStore) -> Self {
        Self {
            listings,
            my_library,
        }
    }

    pub fn section(&self, section: Section) -> &BookStore {
        match section {
            Section::Listings => &self.listings,
            Section::MyLibrary => &self.my_library,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut BookStore {
        match section {
            Section::Listings => &mut self.listings,
            Section::MyLibrary => &mut self.my_library,
        }
    }

    /// The demonstration catalog shipped with the app
    pub fn sample() -> Self {
        Self::new(
            BookStore::with_books(sample_listings()),
            BookStore::with_books(sample_library()),
        )
    }
}

fn sample_listings() -> Vec<Book> {
    vec![
        Book::new("The Swift Programming Language", "Apple Inc.")
            .with_description(
                "A comprehensive guide to Swift, Apple's powerful and intuitive programming language.",
            )
            .with_cover("swift")
            .with_location(Location::new(37.3349, -122.0090)),
        Book::new("Clean Code", "Robert C. Martin")
            .with_description(
                "A handbook of agile software craftsmanship with principles, patterns, and best practices.",
            )
            .with_cover("clean-code")
            .with_condition("Like new")
            .with_location(Location::new(41.8781, -87.6298)),
        Book::new("Design Patterns", "Erich Gamma et al.")
            .with_description("Elements of reusable object-oriented software with classic design patterns.")
            .with_cover("design-patterns")
            .with_location(Location::new(47.6062, -122.3321)),
        Book::new("The Pragmatic Programmer", "Andrew Hunt & David Thomas")
            .with_description(
                "Journey to mastery with practical tips for effective software development.",
            )
            .with_cover("pragmatic-programmer")
            .with_condition("Gently used")
            .with_location(Location::new(30.2672, -97.7431)),
        Book::new("Introduction to Algorithms", "Cormen, Leiserson, Rivest, Stein")
            .with_description("Foundational algorithms and data structures with rigorous analysis.")
            .with_cover("clrs")
            .with_location(Location::new(42.3601, -71.0942)),
    ]
}

fn sample_library() -> Vec<Book> {
    vec![
        Book::new("Introduction to Algorithms", "Cormen"),
        Book::new("Design Patterns", "Gamma et al."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse() {
        assert_eq!("listings".parse::<Section>().unwrap(), Section::Listings);
        assert_eq!("Library".parse::<Section>().unwrap(), Section::MyLibrary);
        assert_eq!("my-library".parse::<Section>().unwrap(), Section::MyLibrary);
        assert_eq!(
            "shelf".parse::<Section>(),
            Err(LiterateError::UnknownSection("shelf".to_string()))
        );
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::Listings.to_string(), "Listings");
        assert_eq!(Section::MyLibrary.to_string(), "My Library");
    }

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.section(Section::Listings).len(), 5);
        assert_eq!(catalog.section(Section::MyLibrary).len(), 2);
        assert!(catalog.listings.iter().all(|b| b.location.is_some()));
        assert!(catalog.my_library.region().is_none());
    }

    #[test]
    fn test_sample_listing_conditions() {
        let catalog = Catalog::sample();
        let conditions: Vec<Option<&str>> = catalog
            .listings
            .iter()
            .map(|b| b.condition.as_deref())
            .collect();
        assert_eq!(
            conditions,
            vec![None, Some("Like new"), None, Some("Gently used"), None]
        );
        assert!(catalog.my_library.iter().all(|b| b.condition.is_none()));
    }

    #[test]
    fn test_sections_are_independent() {
        let mut catalog = Catalog::sample();
        catalog.section_mut(Section::MyLibrary).add_sample();
        assert_eq!(catalog.my_library.len(), 3);
        assert_eq!(catalog.listings.len(), 5);
    }
}
