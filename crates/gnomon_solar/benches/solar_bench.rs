use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gnomon_solar::{
    GeoLocation, SeriesConfig, SolarModel, azimuth, elevation, elevation_series, sun_position,
};

fn pipeline_bench(c: &mut Criterion) {
    let jt = 8_750.25;

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("elevation", |b| {
        b.iter(|| elevation(black_box(jt), black_box(42.35), black_box(-71.05)))
    });
    group.bench_function("azimuth", |b| {
        b.iter(|| azimuth(black_box(jt), black_box(42.35), black_box(-71.05)))
    });
    group.bench_function("ecliptic_longitude", |b| {
        b.iter(|| SolarModel::STANDARD.ecliptic_longitude(black_box(jt)))
    });
    group.finish();
}

fn position_bench(c: &mut Criterion) {
    let boston = GeoLocation::new(42.35, -71.05);
    let config = SeriesConfig::ten_minute(1_702_722_600_000, 144);

    let mut group = c.benchmark_group("position");
    group.bench_function("sun_position", |b| {
        b.iter(|| sun_position(black_box(8_750.25), &boston))
    });
    group.bench_function("series_one_day", |b| {
        b.iter(|| elevation_series(black_box(&config), &boston))
    });
    group.finish();
}

criterion_group!(benches, pipeline_bench, position_bench);
criterion_main!(benches);
