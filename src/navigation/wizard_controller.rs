use super::{Location, Route, WizardStep};
use crate::intake::domain::{OrganizationSize, RiskTolerance, Role, WizardAnswers};

/// Wizard progress derived from a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub answers: WizardAnswers,
}

impl WizardState {
    pub fn from_location(location: &Location) -> Self {
        let current_step = match Route::resolve(location) {
            Route::Wizard(step) => step,
            Route::Landing | Route::Assessment { .. } => WizardStep::Application,
        };
        Self {
            current_step,
            answers: WizardAnswers::from_location(location),
        }
    }

    /// First step whose answer is still required, if any.
    ///
    /// Risk is never missing: an absent risk resolves to `Medium`.
    pub fn missing_step(&self) -> Option<WizardStep> {
        if self.answers.application.trim().is_empty() {
            Some(WizardStep::Application)
        } else if self.answers.role.is_none() {
            Some(WizardStep::Role)
        } else if self.answers.organization_size.is_none() {
            Some(WizardStep::Size)
        } else {
            None
        }
    }
}

/// Builds the location of `step` carrying every answer given so far.
pub fn wizard_location(step: WizardStep, answers: &WizardAnswers) -> Location {
    answers
        .to_params()
        .into_iter()
        .fold(Location::new(step.path()), |location, (key, value)| {
            location.with_param(key, value)
        })
}

/// Keeps the current location and the state derived from it in lockstep.
///
/// Every handler merges one answer, moves to the next step's location and
/// recomputes the state from that location, so the location is the only
/// source of truth.
#[derive(Debug, Clone)]
pub struct WizardController {
    location: Location,
    state: WizardState,
}

impl WizardController {
    pub fn new(location: Location) -> Self {
        let state = WizardState::from_location(&location);
        Self { location, state }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Replaces the location (back/forward, redirects) and recomputes state.
    pub fn navigate(&mut self, location: Location) -> &WizardState {
        tracing::debug!(from = %self.location, to = %location, "wizard navigation");
        self.state = WizardState::from_location(&location);
        self.location = location;
        &self.state
    }

    pub fn submit_application(&mut self, application: String) -> Location {
        let mut answers = self.state.answers.clone();
        answers.application = application;
        self.advance(WizardStep::Application, answers)
    }

    pub fn select_role(&mut self, role: Role) -> Location {
        let mut answers = self.state.answers.clone();
        answers.role = Some(role);
        self.advance(WizardStep::Role, answers)
    }

    pub fn select_size(&mut self, size: OrganizationSize) -> Location {
        let mut answers = self.state.answers.clone();
        answers.organization_size = Some(size);
        self.advance(WizardStep::Size, answers)
    }

    pub fn select_risk(&mut self, risk: RiskTolerance) -> Location {
        let mut answers = self.state.answers.clone();
        answers.risk_tolerance = Some(risk);
        self.advance(WizardStep::Risk, answers)
    }

    /// Moves to the previous step, keeping all answers.
    pub fn back(&mut self) -> Location {
        let target = self
            .state
            .current_step
            .previous()
            .unwrap_or(WizardStep::Application);
        let location = wizard_location(target, &self.state.answers);
        self.navigate(location.clone());
        location
    }

    /// Redirects to `step` with the current answers.
    pub fn redirect(&mut self, step: WizardStep) -> Location {
        let location = wizard_location(step, &self.state.answers);
        self.navigate(location.clone());
        location
    }

    fn advance(&mut self, from: WizardStep, answers: WizardAnswers) -> Location {
        let location = wizard_location(from.next(), &answers);
        self.navigate(location.clone());
        location
    }
}
