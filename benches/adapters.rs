// benches/adapters.rs
//! Reader / writer / char-reader adapter throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rot13_rs::{new_char_reader, new_reader, new_writer, CharRead, Utf8CharReader};
use std::hint::black_box;
use std::io::{Cursor, Read, Write};

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");

    for &size in &[KB, 64 * KB, MB] {
        let input = vec![0x61u8; size]; // repeating 'a'

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("reader", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(size);
                new_reader(Cursor::new(black_box(&input)))
                    .read_to_end(&mut out)
                    .unwrap();
                black_box(out)
            });
        });

        group.bench_with_input(BenchmarkId::new("writer", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut writer = new_writer(Vec::with_capacity(size));
                writer.write_all(black_box(&input)).unwrap();
                black_box(writer.into_inner())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("char_reader", format_size(size)),
            &size,
            |b, _| {
                b.iter(|| {
                    let mut out = String::with_capacity(size);
                    new_char_reader(Utf8CharReader::new(black_box(&input[..])))
                        .read_to_string(&mut out)
                        .unwrap();
                    black_box(out)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_adapters);
criterion_main!(benches);
