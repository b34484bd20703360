//! Report rendering for a filter profile.
//!
//! Markdown is the default; JSON is available for machine consumption.
//! Both are pure functions of their inputs, so rendering the same profile
//! twice yields byte-identical output.

use crate::labels::LabelMap;
use crate::profile::FilterProfile;
use anyhow::Result;
use std::fmt::Write;

/// Date-range keys are noise on every dashboard and never rendered.
const SUPPRESSED_KEYS: &[&str] = &["date-from", "date-to"];

/// Renders the profile as a Markdown report.
pub fn render_markdown(profile: &FilterProfile, labels: &LabelMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Dashboard Type: {}\n", profile.dashboard_type);

    if profile.filters.is_empty() {
        out.push_str("No filters applied.\n");
        return out;
    }

    out.push_str("## Profile:\n");
    for (key, values) in &profile.filters {
        if SUPPRESSED_KEYS.contains(&key.as_str()) {
            continue;
        }
        let label = labels.display(key);
        match values.as_slice() {
            [single] => {
                let _ = writeln!(out, "- **{label}**: {single}");
            }
            many => {
                let _ = writeln!(out, "- **{label}**:");
                for value in many {
                    let _ = writeln!(out, "  - {value}");
                }
            }
        }
    }
    out
}

/// Renders the profile as pretty JSON: the dashboard type as its display
/// label, filters as an ordered object of key → value arrays.
pub fn render_json(profile: &FilterProfile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}
