//! Dashboard type classification from the URL path.

use serde::Serialize;
use std::fmt;

/// Coarse dashboard category inferred from keywords in the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DashboardType {
    /// Layer 3 network analytics dashboard.
    #[serde(rename = "L3 - Network Analytics")]
    L3NetworkAnalytics,
    /// Layer 7 security or analytics dashboard.
    #[serde(rename = "L7 - Security or Analytics")]
    L7SecurityOrAnalytics,
    /// Path matched no known dashboard keyword.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl DashboardType {
    /// Human-facing label, used for the report heading.
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardType::L3NetworkAnalytics => "L3 - Network Analytics",
            DashboardType::L7SecurityOrAnalytics => "L7 - Security or Analytics",
            DashboardType::Unknown => "Unknown",
        }
    }

    /// Filter keys a dashboard of this type is expected to carry.
    ///
    /// Populated only for L3 network analytics today. The renderer does not
    /// consult this; it exists for callers that want to check a profile for
    /// completeness.
    pub fn required_filters(&self) -> &'static [&'static str] {
        match self {
            DashboardType::L3NetworkAnalytics => &[
                "dest-ip",
                "src-ip",
                "protocol",
                "src-asn",
                "dest-port",
                "src-port",
                "tcp-flag",
            ],
            DashboardType::L7SecurityOrAnalytics | DashboardType::Unknown => &[],
        }
    }
}

impl fmt::Display for DashboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a URL path into a dashboard type by substring matching.
///
/// The "network-analytics" check runs first, so a path containing both
/// "network-analytics" and "security" still classifies as L3.
pub fn classify_path(path: &str) -> DashboardType {
    if path.contains("network-analytics") {
        DashboardType::L3NetworkAnalytics
    } else if path.contains("analytics") || path.contains("security") {
        DashboardType::L7SecurityOrAnalytics
    } else {
        DashboardType::Unknown
    }
}
