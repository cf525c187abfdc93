use crate::{
    currency::Formatter,
    dataset::Dataset,
    domain::{KpiDailyRecord, RecapData, ReportMeta},
    utils::{clock::Clock, date_range::format_date_range},
};

use super::{compute_insights_with, generate_narrative, render_markdown};

/// Runs the whole pipeline for one named dataset.
pub struct Recap;

impl Recap {
    pub fn build(
        dataset_name: &str,
        dataset: &Dataset,
        formatter: &dyn Formatter,
        clock: &dyn Clock,
        title: &str,
    ) -> RecapData {
        let generated_at = clock.now();
        let insights = compute_insights_with(formatter, &dataset.daily, &dataset.spend);
        let narrative = generate_narrative(&insights);
        let meta = ReportMeta::new(dataset_name, generated_at.date_naive());
        let markdown = render_markdown(&insights, &meta, formatter, title);
        tracing::info!(
            dataset = dataset_name,
            insights = insights.len(),
            "recap generated"
        );
        RecapData {
            dataset_name: dataset_name.to_string(),
            insights,
            narrative,
            markdown,
            period: period_label(&dataset.daily),
            generated_at,
        }
    }
}

/// Display range covering the records' dates, e.g. `November 1–7, 2025`.
pub fn period_label(daily: &[KpiDailyRecord]) -> Option<String> {
    let dates: Vec<&str> = daily.iter().map(|record| record.date.as_str()).collect();
    format_date_range(&dates)
}
