use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hilal_crescent::CriterionId;
use hilal_hijri::{
    MonthStartCache, NewMoonTable, gregorian_to_hijri_tabular, month_starts,
};
use hilal_time::CivilDate;

fn table() -> NewMoonTable {
    NewMoonTable::new([(
        2025,
        vec![
            2460705.02580, 2460734.53205, 2460763.95775, 2460793.31400, 2460822.62719,
            2460851.93900, 2460881.30011, 2460910.75567, 2460940.32997, 2460970.01817,
            2460999.78344, 2461029.57233,
        ],
    )])
}

fn bench_tabular_conversion(c: &mut Criterion) {
    let date = CivilDate::new(2025, 3, 15).unwrap();
    c.bench_function("gregorian_to_hijri_tabular", |b| {
        b.iter(|| gregorian_to_hijri_tabular(black_box(date)))
    });
}

fn bench_month_starts(c: &mut Criterion) {
    let nm = table();
    c.bench_function("month_starts_umm_al_qura_2025", |b| {
        b.iter(|| month_starts(black_box(2025), CriterionId::UmmAlQura, 21.4225, 39.8262, &nm))
    });
}

fn bench_cached_month_starts(c: &mut Criterion) {
    let nm = table();
    let cache = MonthStartCache::new();
    cache.month_starts(2025, CriterionId::UmmAlQura, 21.4225, 39.8262, &nm);
    c.bench_function("month_starts_cached", |b| {
        b.iter(|| cache.month_starts(black_box(2025), CriterionId::UmmAlQura, 21.4225, 39.8262, &nm))
    });
}

criterion_group!(
    benches,
    bench_tabular_conversion,
    bench_month_starts,
    bench_cached_month_starts
);
criterion_main!(benches);
