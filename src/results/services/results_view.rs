use crate::results::domain::{Assessment, CardId};
use crate::results::policies::visible_cards_for;

/// Identifies one fetch issued by a [`ResultsView`].
///
/// Only the ticket of the latest fetch is accepted on completion, so a slow
/// response for an earlier id or role can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What the results screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Loading,
    Failed(String),
    Ready(Box<Assessment>),
}

/// State of one visit to `/assessments/{id}`.
#[derive(Debug, Clone)]
pub struct ResultsView {
    assessment_id: String,
    role: Option<String>,
    generation: u64,
    state: ResultsState,
}

impl ResultsView {
    /// Opens the view and issues the first fetch.
    pub fn open(assessment_id: impl Into<String>, role: Option<String>) -> (Self, FetchTicket) {
        let mut view = Self {
            assessment_id: assessment_id.into(),
            role,
            generation: 0,
            state: ResultsState::Loading,
        };
        let ticket = view.begin_fetch();
        (view, ticket)
    }

    pub fn assessment_id(&self) -> &str {
        &self.assessment_id
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    /// Cards the current role may see.
    pub fn visible_cards(&self) -> &'static [CardId] {
        visible_cards_for(self.role())
    }

    /// Points the view at a new id or role.
    ///
    /// Returns a ticket when either changed; the previous assessment is
    /// dropped and the view is back to `Loading`.
    pub fn navigate(
        &mut self,
        assessment_id: impl Into<String>,
        role: Option<String>,
    ) -> Option<FetchTicket> {
        let assessment_id = assessment_id.into();
        if assessment_id == self.assessment_id && role == self.role {
            return None;
        }
        self.assessment_id = assessment_id;
        self.role = role;
        Some(self.begin_fetch())
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Assessment, String>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale assessment response"
            );
            return false;
        }
        self.state = match result {
            Ok(assessment) => ResultsState::Ready(Box::new(assessment)),
            Err(message) => ResultsState::Failed(message),
        };
        true
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ResultsState::Loading;
        tracing::debug!(
            id = %self.assessment_id,
            role = ?self.role,
            ticket = self.generation,
            "fetching assessment"
        );
        FetchTicket(self.generation)
    }
}
