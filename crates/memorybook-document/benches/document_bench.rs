// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for album rendering in the memorybook-document crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use memorybook_core::{AlbumConfig, AlbumDetails};
use memorybook_document::{Album, AlbumWriter, BuiltinFontMetrics, PagePlanner, Photo};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn synthetic_album(photos: usize) -> Album {
    let mut album = Album::new(AlbumDetails {
        title: "Benchmark Memories".into(),
        from_name: "Sam".into(),
        to_name: "Alex".into(),
        closing_message: Some("Until next time".into()),
    });
    for index in 0..photos {
        let img = RgbImage::from_pixel(120, 90, Rgb([30, (index * 40) as u8, 200]));
        album.push(
            Photo::from_dynamic(DynamicImage::ImageRgb8(img)),
            format!("Photo number {index} with a caption long enough to wrap onto a second line"),
        );
    }
    album
}

/// Benchmark planning every page of a ten-photo album (layout + fit only).
fn bench_plan_album(c: &mut Criterion) {
    let config = AlbumConfig::default();
    let album = synthetic_album(10);

    c.bench_function("plan_album (10 photos)", |b| {
        b.iter(|| {
            let planner = PagePlanner::new(&config, &BuiltinFontMetrics);
            let photos = album
                .entries
                .iter()
                .map(|entry| (entry.photo.dimensions(), entry.caption.as_str()));
            black_box(planner.plan_album(&album.details, photos).expect("plan failed"));
        });
    });
}

/// Benchmark rendering a small album to PDF bytes, including image embedding.
fn bench_render_album(c: &mut Criterion) {
    let writer = AlbumWriter::default();
    let album = synthetic_album(3);

    c.bench_function("render_album (3 photos, 120x90)", |b| {
        b.iter(|| {
            black_box(writer.render(black_box(&album)).expect("render failed"));
        });
    });
}

criterion_group!(benches, bench_plan_album, bench_render_album);
criterion_main!(benches);
