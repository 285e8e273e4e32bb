use std::fmt;

/// Organization size bucket.
///
/// Locations carry the label (`10-100`); the assessment API expects its own
/// identifiers (`small`, `medium`, `large`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationSize {
    Small,
    Medium,
    Large,
}

impl OrganizationSize {
    pub const ALL: [OrganizationSize; 3] = [
        OrganizationSize::Small,
        OrganizationSize::Medium,
        OrganizationSize::Large,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrganizationSize::Small => "1-10",
            OrganizationSize::Medium => "10-100",
            OrganizationSize::Large => "100+",
        }
    }

    pub fn api_id(&self) -> &'static str {
        match self {
            OrganizationSize::Small => "small",
            OrganizationSize::Medium => "medium",
            OrganizationSize::Large => "large",
        }
    }

    /// Resolves a size from its label or API id.
    pub fn from_label(value: &str) -> Option<OrganizationSize> {
        let needle = value.trim();
        Self::ALL.into_iter().find(|size| {
            size.label() == needle || size.api_id().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for OrganizationSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
