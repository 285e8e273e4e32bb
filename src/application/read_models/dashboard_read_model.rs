use super::card_views::*;
use crate::results::domain::CardId;

/// Rendered content of one card.
///
/// `Option` payloads are `None` when the assessment lacks that slice.
#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    ApplicationVendor(ApplicationVendorView),
    TrustScore(Option<TrustScoreView>),
    Confidence(ConfidenceView),
    TrustBreakdown(Option<TrustBreakdownView>),
    KeyTakeaways(KeyTakeawaysView),
    Vulnerabilities(Option<SeverityView>),
    Incidents(Option<SeverityView>),
    RecentCves(Vec<CveView>),
    RecentIncidents(Vec<IncidentView>),
    Compliance(ComplianceView),
    Certifications(Vec<CertificationView>),
    Architecture(Option<ArchitectureView>),
    Alternatives(Vec<AlternativeView>),
}

impl CardView {
    pub fn id(&self) -> CardId {
        match self {
            CardView::ApplicationVendor(_) => CardId::ApplicationVendor,
            CardView::TrustScore(_) => CardId::TrustScore,
            CardView::Confidence(_) => CardId::Confidence,
            CardView::TrustBreakdown(_) => CardId::TrustBreakdown,
            CardView::KeyTakeaways(_) => CardId::KeyTakeaways,
            CardView::Vulnerabilities(_) => CardId::Vulnerabilities,
            CardView::Incidents(_) => CardId::Incidents,
            CardView::RecentCves(_) => CardId::RecentCves,
            CardView::RecentIncidents(_) => CardId::RecentIncidents,
            CardView::Compliance(_) => CardId::Compliance,
            CardView::Certifications(_) => CardId::Certifications,
            CardView::Architecture(_) => CardId::Architecture,
            CardView::Alternatives(_) => CardId::Alternatives,
        }
    }
}

/// Everything a formatter needs to render the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReadModel {
    pub assessment_id: String,
    /// Role the cards were selected for; `global` when none was given.
    pub role: String,
    /// Location of this screen, for sharing.
    pub location: String,
    pub title: String,
    pub cards: Vec<CardView>,
}

impl DashboardReadModel {
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(CardView::id).collect()
    }
}
