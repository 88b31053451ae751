use cell_charts::SvgDocument;
use cell_charts::core::{BandScale, ColorScale, DatePoint, LinearScale, TimeScale};
use cell_charts::marks::{StrokeStyle, draw_line_series};
use cell_charts::palette::TEAL;
use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::percentage((155.0, 30.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.position(black_box(43.21));
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_color_scale_lab_interpolation(c: &mut Criterion) {
    let scale = ColorScale::reference((0.0, 1.0)).expect("valid color scale");

    c.bench_function("color_scale_lab_interpolation", |b| {
        b.iter(|| {
            for i in 0..100 {
                let _ = scale.color_at(black_box(f64::from(i) / 100.0));
            }
        })
    });
}

fn bench_band_scale_lookup_1k(c: &mut Criterion) {
    let keys: Vec<String> = (0..1_000).map(|i| format!("src/module_{i}.rs")).collect();
    let scale = BandScale::new(keys.clone(), (0.0, 5_000.0)).expect("valid band scale");

    c.bench_function("band_scale_lookup_1k", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = scale.center(black_box(key));
            }
        })
    });
}

fn bench_line_series_svg_2k(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
    let data: Vec<DatePoint> = (0..2_000)
        .map(|i| DatePoint::new(start + Duration::hours(i), (i % 100) as f64))
        .collect();
    let x = TimeScale::from_extent(&data, (0.0, 1_600.0)).expect("valid time scale");
    let y = LinearScale::percentage((900.0, 0.0)).expect("valid value scale");

    c.bench_function("line_series_svg_2k", |b| {
        b.iter(|| {
            let mut doc = SvgDocument::new(1_600, 900);
            let root = doc.root();
            draw_line_series(&mut doc, root, black_box(&data), &x, &y, StrokeStyle::new(TEAL, 2.0))
                .expect("line series");
            let _ = doc.to_svg_string();
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_color_scale_lab_interpolation,
    bench_band_scale_lookup_1k,
    bench_line_series_svg_2k
);
criterion_main!(benches);
