use std::fmt;

/// Identifier of one results card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardId {
    ApplicationVendor,
    TrustScore,
    Confidence,
    TrustBreakdown,
    KeyTakeaways,
    Vulnerabilities,
    Incidents,
    RecentCves,
    RecentIncidents,
    Compliance,
    Certifications,
    Architecture,
    Alternatives,
}

impl CardId {
    /// Every card in dashboard order.
    pub const ALL: [CardId; 13] = [
        CardId::ApplicationVendor,
        CardId::TrustScore,
        CardId::Confidence,
        CardId::TrustBreakdown,
        CardId::KeyTakeaways,
        CardId::Vulnerabilities,
        CardId::Incidents,
        CardId::RecentCves,
        CardId::RecentIncidents,
        CardId::Compliance,
        CardId::Certifications,
        CardId::Architecture,
        CardId::Alternatives,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardId::ApplicationVendor => "applicationVendor",
            CardId::TrustScore => "trustScore",
            CardId::Confidence => "confidence",
            CardId::TrustBreakdown => "trustBreakdown",
            CardId::KeyTakeaways => "keyTakeaways",
            CardId::Vulnerabilities => "vulnerabilities",
            CardId::Incidents => "incidents",
            CardId::RecentCves => "recentCVEs",
            CardId::RecentIncidents => "recentIncidents",
            CardId::Compliance => "compliance",
            CardId::Certifications => "certifications",
            CardId::Architecture => "architecture",
            CardId::Alternatives => "alternatives",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CardId::ApplicationVendor => "Application",
            CardId::TrustScore => "Trust Score",
            CardId::Confidence => "Confidence Score",
            CardId::TrustBreakdown => "Trust Score Breakdown",
            CardId::KeyTakeaways => "Key takeaways",
            CardId::Vulnerabilities => "Vulnerabilities",
            CardId::Incidents => "Incidents",
            CardId::RecentCves => "Recent CVEs",
            CardId::RecentIncidents => "Recent Incidents",
            CardId::Compliance => "Compliance",
            CardId::Certifications => "Certifications",
            CardId::Architecture => "Architecture",
            CardId::Alternatives => "Alternatives",
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
