use super::{Location, WizardStep};

pub const ASSESSMENTS_PREFIX: &str = "assessments";

/// Screen a location resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Wizard(WizardStep),
    Assessment { id: String, role: Option<String> },
}

impl Route {
    /// Resolves a location. Unknown paths fall back to the first wizard step.
    pub fn resolve(location: &Location) -> Route {
        let segments = location.segments();
        match segments.as_slice() {
            [] => Route::Landing,
            [prefix, id] if *prefix == ASSESSMENTS_PREFIX => Route::Assessment {
                id: urlencoding::decode(id)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| id.to_string()),
                role: location.param("role").map(str::to_string),
            },
            _ => Route::Wizard(
                WizardStep::from_path(location.path()).unwrap_or(WizardStep::Application),
            ),
        }
    }

    /// Location of the results screen for an assessment.
    pub fn assessment_location(id: &str, role: Option<&str>) -> Location {
        let location = Location::new(format!(
            "/{}/{}",
            ASSESSMENTS_PREFIX,
            urlencoding::encode(id)
        ));
        match role {
            Some(role) => location.with_param("role", role),
            None => location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str) -> Route {
        Route::resolve(&Location::parse(input).unwrap())
    }

    #[test]
    fn test_root_is_landing() {
        assert_eq!(resolve("/"), Route::Landing);
    }

    #[test]
    fn test_wizard_paths() {
        assert_eq!(resolve("/name"), Route::Wizard(WizardStep::Application));
        assert_eq!(resolve("/role?name=x"), Route::Wizard(WizardStep::Role));
        assert_eq!(resolve("/size"), Route::Wizard(WizardStep::Size));
        assert_eq!(resolve("/risk"), Route::Wizard(WizardStep::Risk));
        assert_eq!(resolve("/complete"), Route::Wizard(WizardStep::Complete));
    }

    #[test]
    fn test_unknown_path_defaults_to_first_step() {
        assert_eq!(resolve("/settings"), Route::Wizard(WizardStep::Application));
        assert_eq!(resolve("/assessments"), Route::Wizard(WizardStep::Application));
    }

    #[test]
    fn test_assessment_route() {
        assert_eq!(
            resolve("/assessments/abc123?role=security"),
            Route::Assessment {
                id: "abc123".to_string(),
                role: Some("security".to_string()),
            }
        );
        assert_eq!(
            resolve("/assessments/abc123"),
            Route::Assessment {
                id: "abc123".to_string(),
                role: None,
            }
        );
    }

    #[test]
    fn test_assessment_location() {
        let location = Route::assessment_location("abc123", Some("security"));
        assert_eq!(location.to_string(), "/assessments/abc123?role=security");
    }

    #[test]
    fn test_assessment_location_encodes_id() {
        let location = Route::assessment_location("slack_salesforce inc", None);
        assert_eq!(location.to_string(), "/assessments/slack_salesforce%20inc");
        assert_eq!(
            Route::resolve(&location),
            Route::Assessment {
                id: "slack_salesforce inc".to_string(),
                role: None,
            }
        );
    }
}
