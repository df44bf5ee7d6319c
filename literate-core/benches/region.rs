//! Region fitting and filtering benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use literate_core::{fit_region, Book, BookFilter, Location};

fn library(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            let book = Book::new(format!("Book {i}"), format!("Author {}", i % 37))
                .with_favorite(i % 3 == 0);
            if i % 4 == 0 {
                book
            } else {
                let lat = (i % 180) as f64 - 90.0;
                let lon = (i % 360) as f64 - 180.0;
                book.with_location(Location::new(lat, lon))
            }
        })
        .collect()
}

fn region_benchmark(c: &mut Criterion) {
    let books = library(10_000);
    c.bench_function("fit_region 10k", |b| {
        b.iter(|| fit_region(std::hint::black_box(&books)))
    });

    let filter = BookFilter::new().with_query("author 1").favorites_only(true);
    c.bench_function("filter 10k", |b| {
        b.iter(|| filter.apply(std::hint::black_box(&books)).len())
    });
}

criterion_group!(benches, region_benchmark);
criterion_main!(benches);
