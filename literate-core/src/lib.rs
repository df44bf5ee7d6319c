//! Literate Core Library
//!
//! In-memory model for browsing a personal book library and nearby listings:
//! an observable [`BookStore`], search/favorites filtering, and the region
//! fitter that frames a map around located books. Rendering is left to the
//! caller; this crate only produces values.

pub mod catalog;
pub mod cover;
pub mod error;
pub mod filter;
pub mod map;
pub mod region;
pub mod store;
pub mod types;

pub use catalog::{Catalog, Section};
pub use cover::{resolve_cover, Cover, CoverResolver, ImageHandle};
pub use error::{LiterateError, Result};
pub use filter::BookFilter;
pub use map::MapAnnotation;
pub use region::{fit_region, Viewport, REGION_PADDING_FACTOR, REGION_SPAN_FLOOR};
pub use store::{BookStore, StoreEvent};
pub use types::{Book, BookId, Location, Region, Span};
