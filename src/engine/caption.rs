use crate::domain::{Insight, InsightKind};

/// Short reader-facing phrase for an insight card.
pub fn human_caption(insight: &Insight) -> String {
    let date = insight.context_date.as_deref();
    match insight.kind {
        InsightKind::TotalRevenue | InsightKind::TotalExpenses => "Total across period".into(),
        InsightKind::NetProfit => "Bottom line after expenses".into(),
        InsightKind::BestRevenueDay => with_context("Your strongest sales day", date),
        InsightKind::HighestExpenseDay => with_context("Highest spend day", date),
        InsightKind::AvgActiveUsers => "Daily average".into(),
        InsightKind::PeakNewUsersDay => with_context("Record signups", date),
        InsightKind::BiggestRevenueSpike => with_context("Largest day-over-day jump", date),
        InsightKind::BurnRate => "Average daily spend".into(),
        InsightKind::RunwayDays => "Days remaining at current burn".into(),
        InsightKind::TopSpendCategory => with_context(
            "Where most money went",
            insight.context_category.as_deref(),
        ),
        InsightKind::DataError => "Check the dataset's date fields".into(),
    }
}

fn with_context(phrase: &str, context: Option<&str>) -> String {
    match context {
        Some(value) => format!("{}: {}", phrase, value),
        None => phrase.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_context_when_present() {
        let insight = Insight::new(InsightKind::BestRevenueDay, "Best Revenue Day", "$1.00", "")
            .with_context_date("November 3, 2025");
        assert_eq!(
            human_caption(&insight),
            "Your strongest sales day: November 3, 2025"
        );
    }

    #[test]
    fn falls_back_without_context() {
        let spike = Insight::new(InsightKind::BiggestRevenueSpike, "Spike", "$1.00", "");
        assert_eq!(human_caption(&spike), "Largest day-over-day jump");
        let category = Insight::new(InsightKind::TopSpendCategory, "Top", "Ads", "");
        assert_eq!(human_caption(&category), "Where most money went");
    }

    #[test]
    fn category_caption_uses_category_not_date() {
        let insight = Insight::new(InsightKind::TopSpendCategory, "Top", "Ads", "")
            .with_context_category("Ads")
            .with_context_date("ignored");
        assert_eq!(human_caption(&insight), "Where most money went: Ads");
    }
}
