//! Presentation mappings shared by dashboard front-ends.
//!
//! These degrade to a fallback on unknown input instead of failing.

use chrono::NaiveDate;

/// Lifecycle ladder used to render the IPO progress bar.
pub const IPO_STAGES: [&str; 6] = ["Rumored", "Preparing", "Filed", "Roadshow", "Pricing", "Listed"];

/// Placeholder rendered for a missing date.
pub const TBD: &str = "TBD";

/// Progress through [`IPO_STAGES`] as a percentage in `0.0..=100.0`.
///
/// Labels outside the ladder (including every angel funding round) yield `0.0`.
#[must_use]
pub fn stage_progress(stage: &str) -> f64 {
    IPO_STAGES
        .iter()
        .position(|s| *s == stage)
        .map_or(0.0, |i| (i + 1) as f64 / IPO_STAGES.len() as f64 * 100.0)
}

/// Render an ISO date as e.g. `"Jun 15, 2025"`.
///
/// `None` and empty input render as [`TBD`]; anything that is not a
/// `YYYY-MM-DD` date is returned unchanged.
#[must_use]
pub fn format_date(date: Option<&str>) -> String {
    match date {
        None | Some("") => TBD.to_string(),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_or_else(|_| raw.to_string(), |d| d.format("%b %-d, %Y").to_string()),
    }
}
