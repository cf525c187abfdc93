use crate::domain::{insight::find_kind, Insight, InsightKind};

/// Spikes above this many currency units outrank the best-day highlight.
pub const SPIKE_HIGHLIGHT_THRESHOLD: f64 = 1000.0;

const FALLBACK_DATE: &str = "a notable day";

/// Composes at most two sentences: profitability, then one highlight.
///
/// Only the formatted Net Profit string is consulted for the sign, so a value
/// that rounds to zero reads as a loss.
pub fn generate_narrative(insights: &[Insight]) -> String {
    let mut sentences = Vec::with_capacity(2);
    sentences.push(profitability_sentence(insights));
    if let Some(highlight) = highlight_sentence(insights) {
        sentences.push(highlight);
    }
    format!("{}.", sentences.join(". "))
}

fn profitability_sentence(insights: &[Insight]) -> String {
    let Some(profit) = find_kind(insights, InsightKind::NetProfit) else {
        return "Here's your KPI recap".into();
    };
    let display = profit.primary_value.as_str();
    if is_negative_display(display) {
        format!("You ran at a loss ({})", display)
    } else if is_zero_display(display) {
        format!("You ran at a loss (-{})", display)
    } else {
        format!("You were profitable overall ({})", display)
    }
}

/// Covers both negative styles: `-$150.00` and `($150.00)`.
fn is_negative_display(display: &str) -> bool {
    display.starts_with('-') || (display.starts_with('(') && display.ends_with(')'))
}

/// True when every digit in the formatted value is zero, e.g. `$0.00`.
fn is_zero_display(display: &str) -> bool {
    display.chars().any(|ch| ch.is_ascii_digit())
        && display
            .chars()
            .filter(|ch| ch.is_ascii_digit())
            .all(|ch| ch == '0')
}

fn highlight_sentence(insights: &[Insight]) -> Option<String> {
    let date_of = |insight: &Insight| {
        insight
            .context_date
            .clone()
            .unwrap_or_else(|| FALLBACK_DATE.to_string())
    };

    if let Some(spike) = find_kind(insights, InsightKind::BiggestRevenueSpike) {
        if spike
            .context_delta
            .is_some_and(|delta| delta > SPIKE_HIGHLIGHT_THRESHOLD)
        {
            return Some(format!(
                "Your biggest revenue jump came on {}",
                date_of(spike)
            ));
        }
    }
    if let Some(best) = find_kind(insights, InsightKind::BestRevenueDay) {
        return Some(format!("Revenue peaked on {}", date_of(best)));
    }
    if let Some(top) = find_kind(insights, InsightKind::TopSpendCategory) {
        let category = top.context_category.as_deref().unwrap_or("categories");
        return Some(format!("Spending was concentrated in {}", category));
    }
    find_kind(insights, InsightKind::PeakNewUsersDay)
        .map(|peak| format!("New user signups peaked on {}", date_of(peak)))
}
