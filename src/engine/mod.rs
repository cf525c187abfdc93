//! The insight pipeline: records in, insights, captions, narrative and
//! Markdown out. Every function here is pure.

pub mod caption;
pub mod insights;
pub mod markdown;
pub mod narrative;
pub mod recap;
pub mod sections;

pub use caption::human_caption;
pub use insights::{compute_insights, compute_insights_with};
pub use markdown::{render_markdown, to_markdown};
pub use narrative::generate_narrative;
pub use recap::{period_label, Recap};
pub use sections::{categorize_insights, InsightSection, InsightTier};
