use std::fmt;

/// Risk tolerance level, ordered from `Low` (index 0) to `High` (index 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [
        RiskTolerance::Low,
        RiskTolerance::Medium,
        RiskTolerance::High,
    ];

    /// Index used when nothing valid was supplied.
    pub const DEFAULT_INDEX: usize = 1;

    pub fn index(&self) -> usize {
        match self {
            RiskTolerance::Low => 0,
            RiskTolerance::Medium => 1,
            RiskTolerance::High => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<RiskTolerance> {
        Self::ALL.get(index).copied()
    }

    /// Label written to locations (`Low`, `Medium`, `High`).
    pub fn label(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Medium => "Medium",
            RiskTolerance::High => "High",
        }
    }

    /// Identifier expected by the assessment API.
    pub fn api_id(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }

    /// Exact label match, case-insensitive.
    pub fn from_label(value: &str) -> Option<RiskTolerance> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(needle))
    }

    /// Resolves an optional label, falling back to `Medium`.
    pub fn from_label_or_default(value: Option<&str>) -> RiskTolerance {
        value
            .and_then(Self::from_label)
            .unwrap_or_default()
    }
}

impl Default for RiskTolerance {
    fn default() -> Self {
        Self::ALL[Self::DEFAULT_INDEX]
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
