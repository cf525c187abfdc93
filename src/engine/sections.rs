use serde::Serialize;

use crate::domain::{Insight, InsightKind};

/// Visual weight of a section; tier one is the headline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum InsightTier {
    Tier1,
    Tier2,
    Tier3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSection {
    pub title: &'static str,
    pub tier: InsightTier,
    pub insights: Vec<Insight>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Group {
    Headline,
    Money,
    Users,
    Costs,
    Highlights,
}

fn group_of(kind: InsightKind) -> Group {
    match kind {
        InsightKind::NetProfit | InsightKind::BestRevenueDay => Group::Headline,
        InsightKind::TotalRevenue
        | InsightKind::TotalExpenses
        | InsightKind::BiggestRevenueSpike
        | InsightKind::BurnRate
        | InsightKind::RunwayDays => Group::Money,
        InsightKind::AvgActiveUsers | InsightKind::PeakNewUsersDay => Group::Users,
        InsightKind::HighestExpenseDay | InsightKind::TopSpendCategory => Group::Costs,
        InsightKind::DataError => Group::Highlights,
    }
}

const LAYOUT: [(Group, &str, InsightTier); 5] = [
    (Group::Headline, "Money", InsightTier::Tier1),
    (Group::Money, "Money", InsightTier::Tier2),
    (Group::Users, "Users", InsightTier::Tier2),
    (Group::Costs, "Costs & Spend", InsightTier::Tier2),
    (Group::Highlights, "Highlights", InsightTier::Tier3),
];

/// Groups insights into display sections, skipping empty ones.
pub fn categorize_insights(insights: &[Insight]) -> Vec<InsightSection> {
    LAYOUT
        .iter()
        .filter_map(|&(group, title, tier)| {
            let members: Vec<Insight> = insights
                .iter()
                .filter(|insight| group_of(insight.kind) == group)
                .cloned()
                .collect();
            (!members.is_empty()).then(|| InsightSection {
                title,
                tier,
                insights: members,
            })
        })
        .collect()
}
