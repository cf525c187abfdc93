use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    currency::{Formatter, LocaleFormatter},
    domain::{CategorySpendRecord, Insight, InsightKind, KpiDailyRecord},
};

/// Record paired with its parsed calendar date.
type Dated<'a> = (NaiveDate, &'a KpiDailyRecord);

/// Computes the insight catalog with the default US formatter.
pub fn compute_insights(daily: &[KpiDailyRecord], spend: &[CategorySpendRecord]) -> Vec<Insight> {
    compute_insights_with(&LocaleFormatter::default(), daily, spend)
}

/// Computes the insight catalog in its fixed order.
///
/// Records whose date is not a strict `YYYY-MM-DD` are dropped. If none
/// survive, the result is a single [`InsightKind::DataError`] insight. Each
/// other insight is simply left out when its inputs are missing.
pub fn compute_insights_with(
    formatter: &dyn Formatter,
    daily: &[KpiDailyRecord],
    spend: &[CategorySpendRecord],
) -> Vec<Insight> {
    if daily.is_empty() {
        return Vec::new();
    }

    let records: Vec<Dated<'_>> = daily
        .iter()
        .filter_map(|record| record.calendar_date().map(|date| (date, record)))
        .collect();
    let dropped = daily.len() - records.len();
    if dropped > 0 {
        tracing::warn!(dropped, total = daily.len(), "dropped KPI records with unparsable dates");
    }
    if records.is_empty() {
        return vec![no_valid_dates()];
    }

    let days = records.len();
    let day_label = format!("Across {} days", days);
    let mut insights = Vec::with_capacity(11);

    let total_revenue: f64 = records.iter().map(|(_, r)| r.revenue).sum();
    insights.push(
        Insight::new(
            InsightKind::TotalRevenue,
            "Total Revenue",
            formatter.format_currency(total_revenue),
            day_label.clone(),
        )
        .with_raw_value(total_revenue),
    );

    let total_expenses: f64 = records.iter().map(|(_, r)| r.expenses).sum();
    insights.push(
        Insight::new(
            InsightKind::TotalExpenses,
            "Total Expenses",
            formatter.format_currency(total_expenses),
            day_label,
        )
        .with_raw_value(total_expenses),
    );

    let net_profit = total_revenue - total_expenses;
    insights.push(
        Insight::new(
            InsightKind::NetProfit,
            "Net Profit",
            formatter.format_currency(net_profit),
            if net_profit >= 0.0 {
                "Profitable period"
            } else {
                "Loss period"
            },
        )
        .with_raw_value(net_profit),
    );

    if let Some((date, record)) = first_max_by(records.iter().copied(), |(_, r)| r.revenue) {
        insights.push(day_insight(
            formatter,
            InsightKind::BestRevenueDay,
            "Best Revenue Day",
            formatter.format_currency(record.revenue),
            record.revenue,
            date,
        ));
    }

    if let Some((date, record)) = first_max_by(records.iter().copied(), |(_, r)| r.expenses) {
        insights.push(day_insight(
            formatter,
            InsightKind::HighestExpenseDay,
            "Highest Expenses Day",
            formatter.format_currency(record.expenses),
            record.expenses,
            date,
        ));
    }

    let avg_active_users =
        records.iter().map(|(_, r)| r.active_users as f64).sum::<f64>() / days as f64;
    insights.push(
        Insight::new(
            InsightKind::AvgActiveUsers,
            "Average Daily Active Users",
            formatter.format_number(avg_active_users),
            "Across all days",
        )
        .with_raw_value(avg_active_users),
    );

    if let Some((date, record)) = first_max_by(records.iter().copied(), |(_, r)| r.new_users) {
        insights.push(day_insight(
            formatter,
            InsightKind::PeakNewUsersDay,
            "Peak New Users Day",
            format!("{} users", record.new_users),
            record.new_users as f64,
            date,
        ));
    }

    if let Some((date, delta)) = biggest_revenue_spike(&records) {
        insights.push(
            day_insight(
                formatter,
                InsightKind::BiggestRevenueSpike,
                "Biggest Revenue Spike",
                formatter.format_currency(delta),
                delta,
                date,
            )
            .with_context_delta(delta),
        );
    }

    let burn_rate = total_expenses / days as f64;
    insights.push(
        Insight::new(
            InsightKind::BurnRate,
            "Burn Rate",
            formatter.format_currency(burn_rate),
            "Average daily expenses",
        )
        .with_raw_value(burn_rate),
    );

    // Last record in input order, not the latest date.
    let cash_balance = records.last().and_then(|(_, r)| r.cash_balance);
    if let Some(cash) = cash_balance {
        if burn_rate > 0.0 {
            let runway_days = (cash / burn_rate).floor();
            insights.push(
                Insight::new(
                    InsightKind::RunwayDays,
                    "Runway",
                    format!("{} days", formatter.format_number(runway_days)),
                    "Based on current cash balance and burn rate",
                )
                .with_raw_value(runway_days),
            );
        }
    }

    if let Some((category, total)) = top_spend_category(spend) {
        insights.push(
            Insight::new(
                InsightKind::TopSpendCategory,
                "Top Spending Category",
                category,
                format!("Total: {}", formatter.format_currency(total)),
            )
            .with_raw_value(total)
            .with_context_category(category),
        );
    }

    insights
}

fn no_valid_dates() -> Insight {
    Insight::new(
        InsightKind::DataError,
        "Error",
        "No valid data",
        "Could not parse any valid dates from the dataset",
    )
}

fn day_insight(
    formatter: &dyn Formatter,
    kind: InsightKind,
    title: &str,
    primary_value: String,
    raw_value: f64,
    date: NaiveDate,
) -> Insight {
    let formatted_date = formatter.format_date(date);
    Insight::new(kind, title, primary_value, format!("On {}", formatted_date))
        .with_raw_value(raw_value)
        .with_context_date(formatted_date)
}

/// Maximum by key where the earliest item wins ties.
fn first_max_by<T, K, I, F>(items: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut best: Option<(T, K)> = None;
    for item in items {
        let value = key(&item);
        let replace = match &best {
            Some((_, best_value)) => value > *best_value,
            None => true,
        };
        if replace {
            best = Some((item, value));
        }
    }
    best.map(|(item, _)| item)
}

/// Largest signed day-over-day revenue change, with the day it landed on.
fn biggest_revenue_spike(records: &[Dated<'_>]) -> Option<(NaiveDate, f64)> {
    if records.len() < 2 {
        return None;
    }
    let mut by_date = records.to_vec();
    by_date.sort_by_key(|(date, _)| *date);

    let deltas = by_date
        .windows(2)
        .map(|pair| (pair[1].0, pair[1].1.revenue - pair[0].1.revenue));
    first_max_by(deltas, |(_, delta)| *delta)
}

/// Category with the largest summed amount; first-seen category wins ties.
fn top_spend_category(spend: &[CategorySpendRecord]) -> Option<(&str, f64)> {
    let mut order: Vec<(&str, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in spend {
        let category = record.category.as_str();
        match index.get(category) {
            Some(&slot) => order[slot].1 += record.amount,
            None => {
                index.insert(category, order.len());
                order.push((category, record.amount));
            }
        }
    }
    first_max_by(order, |(_, total)| *total)
}
