use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pulsewrap_core::{
    domain::{CategorySpendRecord, KpiDailyRecord, ReportMeta},
    engine::{compute_insights, generate_narrative, to_markdown},
};

const CATEGORIES: [&str; 5] = ["Ads", "Cloud", "Payroll", "Tools", "Office"];

fn build_sample(days: usize) -> (Vec<KpiDailyRecord>, Vec<CategorySpendRecord>) {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut daily = Vec::with_capacity(days);
    let mut spend = Vec::with_capacity(days * 2);

    for idx in 0..days {
        let date = (start + Duration::days(idx as i64)).format("%Y-%m-%d").to_string();
        let mut record = KpiDailyRecord::new(
            date.clone(),
            1000.0 + (idx % 97) as f64 * 12.5,
            700.0 + (idx % 31) as f64 * 8.0,
            100 + (idx % 50) as i64,
            (idx % 23) as i64,
        );
        if idx == days - 1 {
            record = record.with_cash_balance(250_000.0);
        }
        daily.push(record);
        for offset in 0..2 {
            let category = CATEGORIES[(idx + offset) % CATEGORIES.len()];
            spend.push(CategorySpendRecord::new(date.clone(), category, 40.0 + offset as f64));
        }
    }
    (daily, spend)
}

fn bench_pipeline(c: &mut Criterion) {
    let (daily, spend) = build_sample(black_box(3_650));
    let meta = ReportMeta::new("Benchmark", NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());

    c.bench_function("compute_insights_10y", |b| {
        b.iter(|| compute_insights(black_box(&daily), black_box(&spend)))
    });

    c.bench_function("recap_render_10y", |b| {
        b.iter(|| {
            let insights = compute_insights(&daily, &spend);
            let narrative = generate_narrative(&insights);
            (narrative, to_markdown(&insights, &meta))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
