use std::fmt;

/// Viewer persona chosen in the wizard.
///
/// The role only decides which result cards are shown. `Global` is never
/// offered in the wizard but is accepted from a location and is the fallback
/// for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Executive,
    Security,
    Compliance,
    Technical,
    Global,
}

impl Role {
    /// Roles offered by the role selection step, in display order.
    pub const SELECTABLE: [Role; 4] = [
        Role::Executive,
        Role::Security,
        Role::Compliance,
        Role::Technical,
    ];

    pub const ALL: [Role; 5] = [
        Role::Executive,
        Role::Security,
        Role::Compliance,
        Role::Technical,
        Role::Global,
    ];

    /// Identifier used in locations and the API (`security`).
    pub fn id(&self) -> &'static str {
        match self {
            Role::Executive => "executive",
            Role::Security => "security",
            Role::Compliance => "compliance",
            Role::Technical => "technical",
            Role::Global => "global",
        }
    }

    /// Human-readable label (`Security`).
    pub fn label(&self) -> &'static str {
        match self {
            Role::Executive => "Executive",
            Role::Security => "Security",
            Role::Compliance => "Compliance",
            Role::Technical => "Technical",
            Role::Global => "Global",
        }
    }

    /// Resolves a role from its id or label, ignoring case.
    pub fn from_id(value: &str) -> Option<Role> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.id().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_known_roles() {
        assert_eq!(Role::from_id("executive"), Some(Role::Executive));
        assert_eq!(Role::from_id("security"), Some(Role::Security));
        assert_eq!(Role::from_id("Compliance"), Some(Role::Compliance));
        assert_eq!(Role::from_id(" technical "), Some(Role::Technical));
        assert_eq!(Role::from_id("global"), Some(Role::Global));
    }

    #[test]
    fn test_from_id_unknown() {
        assert_eq!(Role::from_id("ciso"), None);
        assert_eq!(Role::from_id(""), None);
    }

    #[test]
    fn test_selectable_excludes_global() {
        assert_eq!(Role::SELECTABLE.len(), 4);
        assert!(!Role::SELECTABLE.contains(&Role::Global));
    }

    #[test]
    fn test_display_is_id() {
        assert_eq!(Role::Security.to_string(), "security");
        assert_eq!(Role::Security.label(), "Security");
    }
}
