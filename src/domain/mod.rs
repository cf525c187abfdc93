pub mod insight;
pub mod kpi;
pub mod report;
pub mod spend;

pub use insight::{Insight, InsightKind};
pub use kpi::KpiDailyRecord;
pub use report::{RecapData, ReportMeta};
pub use spend::CategorySpendRecord;
