use crate::domain::model::RecordSet;
use crate::domain::report::TargetingReport;
use crate::utils::error::Result;

const RULE_WIDTH: usize = 60;

pub fn banner() -> String {
    format!(
        "Kansas City Dating Strategy - Data Scraping Framework\n{}",
        "=".repeat(RULE_WIDTH)
    )
}

/// Per-category record counts, e.g. "📍 Climbing Gyms: 4".
pub fn format_summary(record_sets: &[RecordSet]) -> String {
    let mut lines = vec![
        String::new(),
        "📊 SUMMARY RESULTS".to_string(),
        "=".repeat(RULE_WIDTH),
    ];
    lines.extend(record_sets.iter().map(|set| {
        format!("📍 {}: {}", set.category().display_name(), set.len())
    }));
    lines.join("\n")
}

pub fn format_top_locations(report: &TargetingReport, limit: usize) -> String {
    let mut lines = vec![
        String::new(),
        format!("🏆 TOP {} LOCATIONS BY GCA COMPATIBILITY:", limit),
    ];
    lines.extend(
        report
            .top_10_locations
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, location)| {
                format!("{}. {} - Score: {:.1}", i + 1, location.name, location.gca_score)
            }),
    );
    lines.join("\n")
}

pub fn report_json(report: &TargetingReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
