//! Label and tone lookups for enumerated assessment values.
//!
//! Unrecognized values never fail: they fall back to a gray tone and a
//! capitalized or "Unknown" label.
use super::palette::Tone;

/// A display label with its tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

pub const UNKNOWN: &str = "Unknown";

/// Upper-cases the first character.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn confidence(value: Option<&str>) -> Badge {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("high") => Badge::new("High", Tone::Green),
        Some("medium") => Badge::new("Medium", Tone::Orange),
        Some("low") => Badge::new("Low", Tone::Red),
        Some(other) if !other.is_empty() => Badge::new(capitalize(other), Tone::Gray),
        _ => Badge::new(UNKNOWN, Tone::Gray),
    }
}

/// Trend of a score or of CVE/incident counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub arrow: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

/// For counts, `improving` means fewer findings: shown as a green down arrow.
pub fn trend(value: Option<&str>) -> Trend {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("improving") => Trend {
            arrow: "↓",
            label: "Improving",
            tone: Tone::Green,
        },
        Some("declining") => Trend {
            arrow: "↑",
            label: "Declining",
            tone: Tone::Red,
        },
        _ => Trend {
            arrow: "→",
            label: "Stable",
            tone: Tone::Blue,
        },
    }
}

pub fn compliance_level(value: Option<&str>) -> Badge {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("compliant") => Badge::new("Compliant", Tone::Green),
        Some("non-compliant") => Badge::new("Non-compliant", Tone::Red),
        Some("partial") => Badge::new("Partial", Tone::Orange),
        Some(other) if !other.is_empty() => Badge::new(capitalize(other), Tone::Gray),
        _ => Badge::new(UNKNOWN, Tone::Gray),
    }
}

pub fn cert_status(value: Option<&str>) -> Badge {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("active") => Badge::new("Active", Tone::Green),
        Some("expired") => Badge::new("Expired", Tone::Red),
        Some("pending") => Badge::new("Pending", Tone::Orange),
        Some(other) if !other.is_empty() => Badge::new(capitalize(other), Tone::Gray),
        _ => Badge::new(UNKNOWN, Tone::Gray),
    }
}

pub fn deployment(value: Option<&str>) -> String {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("on-premise") => "On-Premise".to_string(),
        Some("cloud") => "Cloud".to_string(),
        Some("saas") => "SaaS".to_string(),
        Some("hybrid") => "Hybrid".to_string(),
        Some(other) if !other.is_empty() => capitalize(other),
        _ => UNKNOWN.to_string(),
    }
}

/// Tone of a CVE severity (critical/high/medium/low).
pub fn cve_severity_tone(value: Option<&str>) -> Tone {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("critical") => Tone::Red,
        Some("high") => Tone::Orange,
        Some("medium") => Tone::Yellow,
        Some("low") => Tone::Green,
        _ => Tone::Gray,
    }
}

/// Tone of an incident severity, which has no critical level.
pub fn incident_severity_tone(value: Option<&str>) -> Tone {
    match value.map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("critical") | Some("high") => Tone::Red,
        Some("medium") => Tone::Orange,
        Some("low") => Tone::Yellow,
        _ => Tone::Gray,
    }
}

pub fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => UNKNOWN,
    }
}

/// Text or the "Unknown" placeholder when absent or blank.
pub fn or_unknown(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("partial"), "Partial");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_confidence() {
        assert_eq!(confidence(Some("high")).tone, Tone::Green);
        assert_eq!(confidence(Some("Medium")).tone, Tone::Orange);
        assert_eq!(confidence(Some("low")).tone, Tone::Red);
        assert_eq!(confidence(None).label, "Unknown");
    }

    #[test]
    fn test_trend() {
        let improving = trend(Some("improving"));
        assert_eq!((improving.arrow, improving.tone), ("↓", Tone::Green));
        let declining = trend(Some("declining"));
        assert_eq!((declining.arrow, declining.tone), ("↑", Tone::Red));
        assert_eq!(trend(None).label, "Stable");
        assert_eq!(trend(Some("sideways")).tone, Tone::Blue);
    }

    #[test]
    fn test_compliance_and_cert_status() {
        assert_eq!(compliance_level(Some("non-compliant")).tone, Tone::Red);
        assert_eq!(compliance_level(Some("partial")).label, "Partial");
        assert_eq!(cert_status(Some("expired")).tone, Tone::Red);
        assert_eq!(cert_status(Some("pending")).tone, Tone::Orange);
        assert_eq!(cert_status(Some("revoked")).label, "Revoked");
    }

    #[test]
    fn test_deployment_labels() {
        assert_eq!(deployment(Some("saas")), "SaaS");
        assert_eq!(deployment(Some("on-premise")), "On-Premise");
        assert_eq!(deployment(None), "Unknown");
    }

    #[test]
    fn test_severity_tones() {
        assert_eq!(cve_severity_tone(Some("Critical")), Tone::Red);
        assert_eq!(cve_severity_tone(Some("low")), Tone::Green);
        assert_eq!(incident_severity_tone(Some("High")), Tone::Red);
        assert_eq!(incident_severity_tone(Some("low")), Tone::Yellow);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(yes_no(Some(true)), "Yes");
        assert_eq!(yes_no(None), "Unknown");
        assert_eq!(or_unknown(Some("  ")), "Unknown");
        assert_eq!(or_unknown(Some("AES")), "AES");
    }
}
