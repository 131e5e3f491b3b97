use criterion::{Criterion, black_box, criterion_group, criterion_main};
use udaya_vedic_base::{
    AyanamshaSystem, GeoLocation, RiseSetConfig, RiseSetEvent, ayanamsha_deg, classify,
    compute_rise_set, local_clock_noon_jd, sun_position,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;
    let jd = 2_460_000.5;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("classify", |b| b.iter(|| classify(black_box(lon))));
    group.bench_function("classify_negative_wrap", |b| {
        b.iter(|| classify(black_box(-7_200.0 - lon)))
    });
    group.bench_function("classify_tropical_lahiri", |b| {
        b.iter(|| classify(black_box(lon) - ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(jd))))
    });
    group.bench_function("ayanamsha_lahiri", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(jd)))
    });
    group.finish();
}

fn solar_bench(c: &mut Criterion) {
    let chennai = GeoLocation::new(13.0827, 80.2707, 0.0);
    let noon = local_clock_noon_jd(2_460_389.5, 5.5);
    let config = RiseSetConfig::default();

    let mut group = c.benchmark_group("solar");
    group.bench_function("sun_position", |b| b.iter(|| sun_position(black_box(noon))));
    group.bench_function("sunrise_chennai", |b| {
        b.iter(|| compute_rise_set(&chennai, RiseSetEvent::Sunrise, black_box(noon), &config))
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, solar_bench);
criterion_main!(benches);
