use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seasonal_series::models::Record;
use seasonal_series::processors::{Aggregator, SeriesPipeline};
use seasonal_series::readers::SeriesReader;
use seasonal_series::writers::TextReporter;

// Daily series starting 1/1/1990 with a seasonal cycle
fn create_daily_series(days: usize) -> Vec<Record> {
    let base_date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    (0..days)
        .map(|day| {
            let date = base_date + chrono::Duration::days(day as i64);
            let phase = (day % 365) as f64 / 365.0 * std::f64::consts::TAU;
            Record::new(date, 0.4 + 0.1 * phase.sin())
        })
        .collect()
}

fn create_csv(days: usize) -> String {
    let mut text = String::from("Date,Value\n");
    for record in create_daily_series(days) {
        text.push_str(&format!(
            "{},{:.4}\n",
            record.date.format("%-m/%-d/%Y"),
            record.value
        ));
    }
    text
}

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for days in [365, 3650, 36500] {
        let records = create_daily_series(days);
        group.bench_with_input(BenchmarkId::from_parameter(days), &records, |b, records| {
            let aggregator = Aggregator::new();
            b.iter(|| aggregator.aggregate(black_box(records)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_reading(c: &mut Criterion) {
    let text = create_csv(3650);
    let reader = SeriesReader::new();

    c.bench_function("read_10_years", |b| {
        b.iter(|| reader.read_str(black_box(&text)).unwrap())
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let text = create_csv(3650);
    let pipeline = SeriesPipeline::new();
    let reporter = TextReporter::new();

    c.bench_function("pipeline_10_years", |b| {
        b.iter(|| {
            let report = pipeline.run_reader(black_box(text.as_bytes())).unwrap();
            reporter.render(&report)
        })
    });
}

criterion_group!(
    benches,
    benchmark_aggregation,
    benchmark_reading,
    benchmark_full_pipeline
);
criterion_main!(benches);
