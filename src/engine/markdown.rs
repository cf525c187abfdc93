use crate::{
    config::DEFAULT_REPORT_TITLE,
    currency::{Formatter, LocaleFormatter},
    domain::{Insight, ReportMeta},
};

/// Renders the report with the default title and US formatting.
pub fn to_markdown(insights: &[Insight], meta: &ReportMeta) -> String {
    render_markdown(insights, meta, &LocaleFormatter::default(), DEFAULT_REPORT_TITLE)
}

/// Renders the report. Output depends only on the arguments.
pub fn render_markdown(
    insights: &[Insight],
    meta: &ReportMeta,
    formatter: &dyn Formatter,
    title: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", title));
    out.push_str(&format!("**Dataset:** {}\n", meta.dataset_name));
    out.push_str(&format!(
        "**Generated:** {}\n\n",
        formatter.format_date(meta.generation_date)
    ));

    for insight in insights {
        out.push_str(&format!("## {}\n", insight.title));
        out.push_str(&insight.primary_value);
        out.push('\n');
        out.push_str(&insight.supporting_detail);
        out.push_str("\n\n");
    }
    out
}
