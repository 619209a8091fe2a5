//! Performance benchmarks for address book operations.
//!
//! These benchmarks measure lookup, search and rendering across book sizes.

use address_book::{AddressBook, Record, RecordQuery};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book with `size` records, each holding three phones.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = Record::new(format!("Contact {}", i)).unwrap();
            for j in 0..3 {
                record.add_phone(format!("{:010}", i * 3 + j)).unwrap();
            }
            record
        })
        .collect()
}

/// Benchmark name lookup across book sizes.
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for size in [10, 100, 1000] {
        let book = create_test_book(size);
        let target = format!("Contact {}", size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| book.find(black_box(&target)).is_ok());
        });
    }

    group.finish();
}

/// Benchmark fuzzy name and exact phone search.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [10, 100, 1000] {
        let book = create_test_book(size);
        let by_name = RecordQuery::by_name("contact 5");
        let by_phone = RecordQuery::by_phone(format!("{:010}", size));

        group.bench_with_input(BenchmarkId::new("name", size), &size, |b, _| {
            b.iter(|| book.search(black_box(&by_name), 5, 30).len());
        });
        group.bench_with_input(BenchmarkId::new("phone", size), &size, |b, _| {
            b.iter(|| book.search(black_box(&by_phone), 5, 30).len());
        });
    }

    group.finish();
}

/// Benchmark rendering a record with many phones.
fn bench_render(c: &mut Criterion) {
    let mut record = Record::new("John").unwrap();
    for i in 0..50 {
        record.add_phone(format!("{:010}", i)).unwrap();
    }

    c.bench_function("render_record_50_phones", |b| {
        b.iter(|| black_box(&record).to_string());
    });
}

criterion_group!(benches, bench_find, bench_search, bench_render);
criterion_main!(benches);
