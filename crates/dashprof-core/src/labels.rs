//! Display labels for known filter keys.

use std::collections::HashMap;

/// Built-in raw-key → display-label table covering the known dashboard
/// filter keys. Keys absent here render in raw form.
const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("src-ip", "Source IP"),
    ("src-asn", "Source ASN"),
    ("protocol", "Protocol"),
    ("tcp-flag", "TCP Flags"),
    ("dest-ip", "Destination IP"),
    ("dest-port", "Destination Port"),
    ("src-port", "Source Port"),
    ("http-method", "Method"),
    ("ja4", "JA4"),
    ("coloCode", "Colo Location"),
    ("ja3-hash", "JA3"),
    ("client-ip", "Client IP"),
    ("status-code", "Response Code"),
    ("asn", "ASN"),
    ("rule-id", "WAF Rule ID"),
    ("path", "Path"),
    ("user-agent", "User Agent"),
    ("host", "Hostname"),
    ("country", "Country"),
    ("referer", "Referer"),
    ("origin-status-code", "Origin response code"),
    ("mitigation-system", "Mitigation system"),
];

/// Read-only raw-key → display-label mapping, built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LabelMap {
    labels: HashMap<String, String>,
}

impl LabelMap {
    /// Built-in labels only.
    pub fn builtin() -> Self {
        let labels = BUILTIN_LABELS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { labels }
    }

    /// Built-in labels merged with user overrides; overrides win.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut map = Self::builtin();
        for (key, label) in overrides {
            map.labels.insert(key.clone(), label.clone());
        }
        map
    }

    /// Display label for a normalized key, falling back to the key itself.
    pub fn display<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup() {
        let labels = LabelMap::builtin();
        assert_eq!(labels.display("src-ip"), "Source IP");
        assert_eq!(labels.display("host"), "Hostname");
        assert_eq!(labels.display("rule-id"), "WAF Rule ID");
    }

    #[test]
    fn unknown_key_falls_back_to_raw() {
        let labels = LabelMap::builtin();
        assert_eq!(labels.display("bot-score"), "bot-score");
    }

    #[test]
    fn overrides_win_over_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("host".to_string(), "Site".to_string());
        overrides.insert("bot-score".to_string(), "Bot Score".to_string());

        let labels = LabelMap::with_overrides(&overrides);
        assert_eq!(labels.display("host"), "Site");
        assert_eq!(labels.display("bot-score"), "Bot Score");
        // Untouched built-ins survive the merge.
        assert_eq!(labels.display("protocol"), "Protocol");
    }
}
