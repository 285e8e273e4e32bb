pub mod assessment;
pub mod card;

pub use assessment::{
    Alternative, ApplicationInfo, ApplicationIntel, Architecture, Assessment,
    AssessmentMetadata, Certification, Compliance, CveItem, Framework, IncidentItem,
    SeverityCounts, Summary, TrustScore, Vendor,
};
pub use card::CardId;
