//! Map framing: fit a viewport around a set of book locations

use crate::types::{Book, Location, Region, Span};

/// Smallest span, in degrees, a fitted region may have on either axis
pub const REGION_SPAN_FLOOR: f64 = 0.02;

/// Multiplier applied to the bounding box extent so markers sit off the edges
pub const REGION_PADDING_FACTOR: f64 = 1.5;

/// Compute the padded region containing every located book.
///
/// Books without a location are ignored. Returns `None` when no book has one,
/// in which case the caller should keep its current viewport.
pub fn fit_region<'a, I>(books: I) -> Option<Region>
where
    I: IntoIterator<Item = &'a Book>,
{
    fit_locations(books.into_iter().filter_map(|book| book.location))
}

/// Compute the padded region containing every location
pub fn fit_locations<I>(locations: I) -> Option<Region>
where
    I: IntoIterator<Item = Location>,
{
    let mut locations = locations.into_iter();
    let first = locations.next()?;

    let mut min_lat = first.latitude;
    let mut max_lat = first.latitude;
    let mut min_lon = first.longitude;
    let mut max_lon = first.longitude;

    for loc in locations {
        min_lat = min_lat.min(loc.latitude);
        max_lat = max_lat.max(loc.latitude);
        min_lon = min_lon.min(loc.longitude);
        max_lon = max_lon.max(loc.longitude);
    }

    let center = Location::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0);
    let span = Span::new(
        REGION_SPAN_FLOOR.max((max_lat - min_lat) * REGION_PADDING_FACTOR),
        REGION_SPAN_FLOOR.max((max_lon - min_lon) * REGION_PADDING_FACTOR),
    );

    tracing::trace!(?center, ?span, "Fitted region");
    Some(Region::new(center, span))
}

/// The camera state a map view holds between framings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    region: Region,
}

impl Default for Viewport {
    /// The initial camera before any books are framed
    fn default() -> Self {
        Self {
            region: Region::new(Location::new(37.7749, -122.4194), Span::new(0.1, 0.1)),
        }
    }
}

impl Viewport {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Reframe around the located books.
    ///
    /// Returns `false` and leaves the viewport untouched when no book has a location.
    pub fn frame<'a, I>(&mut self, books: I) -> bool
    where
        I: IntoIterator<Item = &'a Book>,
    {
        match fit_region(books) {
            Some(region) => {
                self.region = region;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn located(lat: f64, lon: f64) -> Book {
        Book::new("Located", "Somebody").with_location(Location::new(lat, lon))
    }

    #[test]
    fn test_empty_input_has_no_region() {
        let books: Vec<Book> = Vec::new();
        assert_eq!(fit_region(&books), None);
    }

    #[test]
    fn test_unlocated_books_have_no_region() {
        let books = vec![Book::new("A", "X"), Book::new("B", "Y")];
        assert_eq!(fit_region(&books), None);
    }

    #[test]
    fn test_single_location_uses_floor() {
        let books = vec![located(47.6062, -122.3321)];
        let region = fit_region(&books).unwrap();
        assert_eq!(region.center, Location::new(47.6062, -122.3321));
        assert_eq!(region.span, Span::new(0.02, 0.02));
    }

    #[test]
    fn test_identical_locations_use_floor() {
        let books = vec![located(1.0, 2.0), located(1.0, 2.0), located(1.0, 2.0)];
        let region = fit_region(&books).unwrap();
        assert_eq!(region.span, Span::new(REGION_SPAN_FLOOR, REGION_SPAN_FLOOR));
    }

    #[test]
    fn test_two_locations() {
        let books = vec![located(37.0, -122.0), located(38.0, -121.0)];
        let region = fit_region(&books).unwrap();
        assert_eq!(region.center, Location::new(37.5, -121.5));
        assert_eq!(region.span, Span::new(1.5, 1.5));
    }

    #[test]
    fn test_unlocated_books_are_skipped() {
        let books = vec![
            Book::new("Nowhere", "Nobody"),
            located(10.0, 10.0),
            Book::new("Also nowhere", "Nobody"),
            located(12.0, 11.0),
        ];
        let region = fit_region(&books).unwrap();
        assert_eq!(region.center, Location::new(11.0, 10.5));
        assert_eq!(region.span, Span::new(3.0, 1.5));
    }

    #[test]
    fn test_floor_applies_per_axis() {
        // Spread along latitude only
        let region = fit_locations([Location::new(0.0, 5.0), Location::new(4.0, 5.0)]).unwrap();
        assert_eq!(region.span, Span::new(6.0, REGION_SPAN_FLOOR));
    }

    #[test]
    fn test_viewport_unchanged_without_locations() {
        let mut viewport = Viewport::default();
        let before = viewport.region();
        assert!(!viewport.frame(&[Book::new("A", "X")]));
        assert_eq!(viewport.region(), before);

        assert!(viewport.frame(&[located(1.0, 1.0)]));
        assert_eq!(viewport.region().center, Location::new(1.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_region_contains_every_location(
            coords in prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 1..50)
        ) {
            let locations: Vec<Location> =
                coords.iter().map(|&(lat, lon)| Location::new(lat, lon)).collect();
            let region = fit_locations(locations.iter().copied()).unwrap();

            prop_assert!(region.span.latitude_delta >= REGION_SPAN_FLOOR);
            prop_assert!(region.span.longitude_delta >= REGION_SPAN_FLOOR);
            for loc in &locations {
                prop_assert!(region.contains(loc), "{:?} not in {:?}", loc, region);
            }
        }

        #[test]
        fn prop_region_ignores_input_order(
            mut coords in prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 1..20)
        ) {
            let forward = fit_locations(coords.iter().map(|&(a, b)| Location::new(a, b)));
            coords.reverse();
            let backward = fit_locations(coords.iter().map(|&(a, b)| Location::new(a, b)));
            prop_assert_eq!(forward, backward);
        }
    }
}
