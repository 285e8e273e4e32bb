use std::fmt;

/// Steps of the intake wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    Application,
    Role,
    Size,
    Risk,
    Complete,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Application,
        WizardStep::Role,
        WizardStep::Size,
        WizardStep::Risk,
        WizardStep::Complete,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            WizardStep::Application => "/name",
            WizardStep::Role => "/role",
            WizardStep::Size => "/size",
            WizardStep::Risk => "/risk",
            WizardStep::Complete => "/complete",
        }
    }

    pub fn from_path(path: &str) -> Option<WizardStep> {
        Self::ALL.into_iter().find(|step| step.path() == path)
    }

    /// Position in the wizard, starting at 0.
    pub fn position(&self) -> usize {
        match self {
            WizardStep::Application => 0,
            WizardStep::Role => 1,
            WizardStep::Size => 2,
            WizardStep::Risk => 3,
            WizardStep::Complete => 4,
        }
    }

    pub fn next(&self) -> WizardStep {
        Self::ALL
            .get(self.position() + 1)
            .copied()
            .unwrap_or(WizardStep::Complete)
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.position().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Application => "Application",
            WizardStep::Role => "Role",
            WizardStep::Size => "Organization size",
            WizardStep::Risk => "Risk tolerance",
            WizardStep::Complete => "Complete",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_path(step.path()), Some(step));
        }
        assert_eq!(WizardStep::from_path("/unknown"), None);
    }

    #[test]
    fn test_next_advances_one_position() {
        assert_eq!(WizardStep::Application.next(), WizardStep::Role);
        assert_eq!(WizardStep::Role.next(), WizardStep::Size);
        assert_eq!(WizardStep::Size.next(), WizardStep::Risk);
        assert_eq!(WizardStep::Risk.next(), WizardStep::Complete);
        assert_eq!(WizardStep::Complete.next(), WizardStep::Complete);
    }

    #[test]
    fn test_previous() {
        assert_eq!(WizardStep::Application.previous(), None);
        assert_eq!(WizardStep::Risk.previous(), Some(WizardStep::Size));
    }
}
