#![doc(test(attr(deny(warnings))))]

//! PulseWrap Core turns daily KPI and category-spend datasets into a fixed
//! catalog of business insights, captions, a short narrative and a Markdown
//! report.
//!
//! ```
//! use pulsewrap_core::{dataset::parse_dataset, engine::compute_insights};
//!
//! let dataset = parse_dataset(
//!     r#"[{"date":"2025-11-01","revenue":1200,"expenses":700,"activeUsers":95,"newUsers":10}]"#,
//!     "[]",
//! )
//! .unwrap();
//! let insights = compute_insights(&dataset.daily, &dataset.spend);
//! assert_eq!(insights[0].primary_value, "$1,200.00");
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod dataset;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("PulseWrap tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
